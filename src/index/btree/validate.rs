//! Structural self-check for the B-tree.
//!
//! [`BTree::validate`] walks every node and confirms the invariants the
//! engine maintains. It is O(n) and meant for tests and assertions, not for
//! the steady-state path; nothing in the engine calls it.

use thiserror::Error;
use tracing::warn;

use crate::common::config::{max_keys, min_keys};
use crate::common::Key;
use crate::index::btree::node::Node;
use crate::index::btree::tree::BTree;

/// The first broken invariant found by [`BTree::check`].
///
/// Depth is counted from the root (depth 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// Node holds too few or too many keys.
    #[error("node at depth {depth} holds {count} keys (allowed {min}..={max})")]
    KeyCount {
        depth: usize,
        count: usize,
        min: usize,
        max: usize,
    },

    /// Keys within a node are not strictly increasing.
    #[error("keys of node at depth {depth} are not strictly increasing")]
    Unsorted { depth: usize },

    /// Internal node without exactly one more child than keys.
    #[error("internal node at depth {depth} has {children} children for {keys} keys")]
    ChildCount {
        depth: usize,
        keys: usize,
        children: usize,
    },

    /// Node flagged as a leaf owns children.
    #[error("leaf at depth {depth} owns {children} children")]
    LeafWithChildren { depth: usize, children: usize },

    /// A key is not strictly between the separators bounding its subtree.
    #[error("node at depth {depth} holds a key outside its separator range")]
    OutOfRange { depth: usize },

    /// Leaves at different depths.
    #[error("leaf at depth {found}, expected every leaf at depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    /// The tracked key count disagrees with the keys actually stored.
    #[error("tree reports {expected} keys but holds {found}")]
    LenMismatch { expected: usize, found: usize },
}

impl<K: Key> BTree<K> {
    /// Whether every structural invariant holds.
    ///
    /// Logs the violation at `warn` when it does not.
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(violation) => {
                warn!(%violation, "btree.validate.failed");
                false
            }
        }
    }

    /// Walk the tree and report the first broken invariant.
    ///
    /// Checks, for every node:
    /// - key count within `0..=2t-1` (root) or `t-1..=2t-1` (others)
    /// - keys strictly increasing
    /// - leaves own no children; internal nodes own `keys + 1`
    /// - every key strictly between the separators bounding its subtree
    /// - every leaf at the same depth
    ///
    /// and finally that [`BTree::len`] matches the number of keys found.
    pub fn check(&self) -> Result<(), Violation> {
        let mut walk = Walk {
            min_degree: self.min_degree,
            leaf_depth: None,
            keys: 0,
        };
        walk.visit(&self.root, 0, None, None)?;

        if walk.keys != self.len {
            return Err(Violation::LenMismatch {
                expected: self.len,
                found: walk.keys,
            });
        }
        Ok(())
    }
}

/// State carried across the recursive walk.
struct Walk {
    min_degree: usize,

    /// Depth of the first leaf reached.
    leaf_depth: Option<usize>,

    /// Keys seen so far.
    keys: usize,
}

impl Walk {
    fn visit<K: Key>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<(), Violation> {
        let keys = node.keys();
        let children = node.children();

        let min = if depth == 0 { 0 } else { min_keys(self.min_degree) };
        let max = max_keys(self.min_degree);
        if keys.len() < min || keys.len() > max {
            return Err(Violation::KeyCount {
                depth,
                count: keys.len(),
                min,
                max,
            });
        }

        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Violation::Unsorted { depth });
        }

        // Sorted, so checking the ends covers every key.
        let below = matches!((lower, keys.first()), (Some(lo), Some(first)) if first <= lo);
        let above = matches!((upper, keys.last()), (Some(hi), Some(last)) if last >= hi);
        if below || above {
            return Err(Violation::OutOfRange { depth });
        }

        self.keys += keys.len();

        if node.is_leaf() {
            if !children.is_empty() {
                return Err(Violation::LeafWithChildren {
                    depth,
                    children: children.len(),
                });
            }
            return self.record_leaf(depth);
        }

        if children.len() != keys.len() + 1 {
            return Err(Violation::ChildCount {
                depth,
                keys: keys.len(),
                children: children.len(),
            });
        }

        for (i, child) in children.iter().enumerate() {
            let lo = if i == 0 { lower } else { keys.get(i - 1) };
            let hi = if i == keys.len() { upper } else { keys.get(i) };
            self.visit(child, depth + 1, lo, hi)?;
        }
        Ok(())
    }

    fn record_leaf(&mut self, depth: usize) -> Result<(), Violation> {
        match self.leaf_depth {
            None => {
                self.leaf_depth = Some(depth);
                Ok(())
            }
            Some(expected) if expected == depth => Ok(()),
            Some(expected) => Err(Violation::UnevenLeafDepth {
                expected,
                found: depth,
            }),
        }
    }
}
