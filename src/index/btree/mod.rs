//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - The tree engine: search, insert, delete
//! - [`Node`] - A node: sorted keys plus owned children
//! - [`Violation`] - What [`BTree::check`] reports when an invariant breaks
//! - [`TreeStats`] / [`TreeShape`] - Restructuring counters and shape summary

mod node;
mod stats;
mod tree;
mod validate;

pub use node::Node;
pub use stats::{TreeShape, TreeStats};
pub use tree::BTree;
pub use validate::Violation;
