//! degree-btree - An in-memory B-tree index with configurable minimum degree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          degree-btree                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Tree Engine (index/btree/tree)              │   │
//! │  │   search ─ insert (split) ─ delete (borrow / merge)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Nodes (index/btree/node)                  │   │
//! │  │        sorted keys + exclusively owned children          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │ Validation (validate)    │  │ Stats (stats)            │    │
//! │  │ O(n) invariant checker   │  │ split/merge/borrow counts│    │
//! │  └──────────────────────────┘  └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config, Error, Key)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use degree_btree::BTree;
//!
//! // Every non-root node holds between t-1 and 2t-1 keys
//! let mut tree = BTree::new(2).unwrap();
//!
//! for key in [1, 2, 3, 4] {
//!     tree.insert(key).unwrap();
//! }
//! assert!(tree.contains(&3));
//! assert_eq!(tree.height(), 2);
//!
//! tree.delete(&3).unwrap();
//! assert!(!tree.contains(&3));
//! assert!(tree.validate());
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE};
pub use common::{Error, Key, Result};

pub use index::btree::{BTree, Node, TreeShape, TreeStats, Violation};
