//! Common types and utilities shared across the crate.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants (degree bounds)
//! - Error types
//! - The [`Key`] trait

pub mod config;
pub mod error;
mod key;

pub use error::{Error, Result};
pub use key::Key;
