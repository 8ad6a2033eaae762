//! Node - the storage unit of the B-tree.
//!
//! A [`Node`] holds an ascending run of keys and, when internal, one more
//! child than it has keys. Nodes are plain data: every restructuring
//! (split, merge, borrow) is performed by the tree engine directly on the
//! fields below.

use crate::common::config::{max_children, max_keys};
use crate::common::Key;

/// A node in the B-tree.
///
/// # Invariants
/// - `keys` is strictly increasing
/// - `leaf` implies `children` is empty
/// - not `leaf` implies `children.len() == keys.len() + 1`
///
/// The `leaf` flag is fixed when the node is created. A leaf never grows
/// children in place and an internal node never loses all of them; the
/// engine builds new nodes or drops emptied ones instead.
#[derive(Debug)]
pub struct Node<K> {
    /// Keys in ascending order.
    pub(crate) keys: Vec<K>,

    /// Owned subtrees. Empty for leaves.
    pub(crate) children: Vec<Node<K>>,

    leaf: bool,

    min_degree: usize,
}

impl<K: Key> Node<K> {
    /// Create an empty node for a tree of minimum degree `min_degree`.
    pub(crate) fn new(min_degree: usize, leaf: bool) -> Self {
        let children = if leaf {
            Vec::new()
        } else {
            Vec::with_capacity(max_children(min_degree))
        };

        Self {
            keys: Vec::with_capacity(max_keys(min_degree)),
            children,
            leaf,
            min_degree,
        }
    }

    /// Keys stored in this node, ascending.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child subtrees. Empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Minimum degree of the tree this node belongs to.
    #[inline]
    pub(crate) fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of keys in this node.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// True iff the node holds `2t - 1` keys.
    ///
    /// A full node must be split before an insert can route through it.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.keys.len() == max_keys(self.min_degree)
    }

    /// True iff the node can give up a key and stay at or above `t - 1`.
    #[inline]
    pub(crate) fn has_spare_key(&self) -> bool {
        self.keys.len() >= self.min_degree
    }

    /// Index of the first key `>= key`.
    ///
    /// For an internal node this is also the child that would contain
    /// `key` when it is not stored here.
    #[inline]
    pub(crate) fn find_index(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// True iff `keys[idx]` exists and equals `key`.
    #[inline]
    pub(crate) fn holds_at(&self, idx: usize, key: &K) -> bool {
        self.keys.get(idx) == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_with(t: usize, keys: &[i64]) -> Node<i64> {
        let mut node = Node::new(t, true);
        node.keys.extend_from_slice(keys);
        node
    }

    #[test]
    fn test_new_leaf_is_empty() {
        let node: Node<i64> = Node::new(3, true);
        assert!(node.is_leaf());
        assert_eq!(node.key_count(), 0);
        assert!(node.children().is_empty());
        assert!(!node.is_full());
    }

    #[test]
    fn test_new_internal() {
        let node: Node<i64> = Node::new(3, false);
        assert!(!node.is_leaf());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_is_full() {
        // t = 2: full at 3 keys
        assert!(!leaf_with(2, &[1, 2]).is_full());
        assert!(leaf_with(2, &[1, 2, 3]).is_full());

        // t = 3: full at 5 keys
        assert!(!leaf_with(3, &[1, 2, 3, 4]).is_full());
        assert!(leaf_with(3, &[1, 2, 3, 4, 5]).is_full());
    }

    #[test]
    fn test_has_spare_key() {
        assert!(!leaf_with(3, &[1, 2]).has_spare_key());
        assert!(leaf_with(3, &[1, 2, 3]).has_spare_key());
    }

    #[test]
    fn test_find_index() {
        let node = leaf_with(3, &[10, 20, 30]);
        assert_eq!(node.find_index(&5), 0);
        assert_eq!(node.find_index(&10), 0);
        assert_eq!(node.find_index(&15), 1);
        assert_eq!(node.find_index(&30), 2);
        assert_eq!(node.find_index(&99), 3);
    }

    #[test]
    fn test_holds_at() {
        let node = leaf_with(3, &[10, 20, 30]);
        assert!(node.holds_at(1, &20));
        assert!(!node.holds_at(1, &15));
        assert!(!node.holds_at(3, &40));
    }
}
