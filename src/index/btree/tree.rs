//! B-tree engine - search, insertion and deletion.
//!
//! The [`BTree`] owns its root node, and every node exclusively owns its
//! children, so restructuring is a matter of moving keys and subtrees
//! between `Vec`s. No child is ever reachable from two parents.
//!
//! Both mutating paths are single top-down passes that fix a node up
//! *before* descending into it:
//! - insert splits any full child it is about to enter, so a leaf always
//!   has room for the new key
//! - delete enlarges any minimum-sized child it is about to enter (by
//!   borrowing from a sibling or merging with one), so removing a key never
//!   underflows a node

use std::mem;

use tracing::{debug, trace};

use crate::common::config::{max_keys, DEFAULT_MIN_DEGREE, MIN_DEGREE};
use crate::common::{Error, Key, Result};
use crate::index::btree::node::Node;
use crate::index::btree::stats::{TreeShape, TreeStats};

/// An in-memory B-tree of minimum degree `t`.
///
/// # Structure
/// ```text
///                    [ 20 | 40 ]                 root: 0..=2t-1 keys
///                   /     |     \
///        [ 5 | 10 ]  [ 25 | 30 ]  [ 45 | 50 ]    non-root: t-1..=2t-1 keys
/// ```
/// All leaves sit at the same depth, and each key separates the subtree to
/// its left (smaller keys) from the subtree to its right (larger keys).
///
/// # Usage
/// ```
/// use degree_btree::{BTree, Error};
///
/// let mut tree = BTree::new(3)?;
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key)?;
/// }
/// assert!(tree.contains(&12));
/// assert_eq!(tree.insert(12), Err(Error::DuplicateKey));
///
/// tree.delete(&12)?;
/// assert!(!tree.contains(&12));
/// assert_eq!(tree.delete(&12), Err(Error::KeyNotFound));
/// assert!(tree.validate());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct BTree<K = i64> {
    /// Minimum degree, fixed for the lifetime of the tree.
    pub(crate) min_degree: usize,

    pub(crate) root: Node<K>,

    /// Number of keys stored.
    pub(crate) len: usize,

    stats: TreeStats,
}

impl<K: Key> BTree<K> {
    /// Create an empty tree.
    ///
    /// # Errors
    /// - `Error::InvalidMinDegree` if `min_degree < 2`
    pub fn new(min_degree: usize) -> Result<Self> {
        if min_degree < MIN_DEGREE {
            return Err(Error::InvalidMinDegree(min_degree));
        }

        Ok(Self::with_degree(min_degree))
    }

    fn with_degree(min_degree: usize) -> Self {
        Self {
            min_degree,
            root: Node::new(min_degree, true),
            len: 0,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// The minimum degree `t` this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only handle to the root node.
    #[inline]
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Find the node holding `key`.
    ///
    /// Prefer [`BTree::contains`] unless you need to inspect the node.
    pub fn search(&self, key: &K) -> Option<&Node<K>> {
        Self::search_node(&self.root, key)
    }

    fn search_node<'a>(node: &'a Node<K>, key: &K) -> Option<&'a Node<K>> {
        let idx = node.find_index(key);

        if node.holds_at(idx, key) {
            return Some(node);
        }
        if node.is_leaf() {
            return None;
        }

        Self::search_node(&node.children[idx], key)
    }

    /// Height of the tree, counted in levels.
    ///
    /// - empty tree (root without keys): 0
    /// - a root that is a leaf with keys: 1
    /// - otherwise one more than the height of any child
    ///
    /// All leaves are at the same depth, so following the leftmost path is
    /// enough.
    pub fn height(&self) -> usize {
        if self.root.keys.is_empty() {
            return 0;
        }

        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            height += 1;
            node = child;
        }
        height
    }

    /// Smallest key, or `None` if the tree is empty.
    pub fn min_key(&self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        Some(Self::leftmost_key(&self.root))
    }

    /// Largest key, or `None` if the tree is empty.
    pub fn max_key(&self) -> Option<K> {
        if self.is_empty() {
            return None;
        }
        Some(Self::rightmost_key(&self.root))
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Vec<K> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_keys(&self.root, &mut out);
        out
    }

    fn collect_keys(node: &Node<K>, out: &mut Vec<K>) {
        if node.is_leaf() {
            out.extend_from_slice(&node.keys);
            return;
        }

        for (i, child) in node.children.iter().enumerate() {
            Self::collect_keys(child, out);
            if let Some(key) = node.keys.get(i) {
                out.push(*key);
            }
        }
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Copy of the restructuring counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Walk the whole tree and summarize its shape. O(n).
    pub fn shape(&self) -> TreeShape {
        let mut shape = TreeShape {
            height: self.height(),
            ..TreeShape::default()
        };
        Self::accumulate_shape(&self.root, &mut shape);
        shape
    }

    fn accumulate_shape(node: &Node<K>, shape: &mut TreeShape) {
        shape.nodes += 1;
        shape.keys += node.keys.len();
        if node.is_leaf() {
            shape.leaves += 1;
        }
        for child in &node.children {
            Self::accumulate_shape(child, shape);
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `key`.
    ///
    /// # Errors
    /// - `Error::DuplicateKey` if `key` is already present (tree unchanged)
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.contains(&key) {
            debug!(?key, "btree.insert.duplicate");
            return Err(Error::DuplicateKey);
        }

        if self.root.is_full() {
            self.grow_root();
        }

        let Self { root, stats, .. } = self;
        Self::insert_non_full(root, key, stats);

        self.len += 1;
        self.stats.inserts += 1;
        Ok(())
    }

    /// Put a new internal root above the full old root and split it.
    ///
    /// This is the only way the tree gains height.
    fn grow_root(&mut self) {
        let old_root = mem::replace(&mut self.root, Node::new(self.min_degree, false));
        self.root.children.push(old_root);

        let Self { root, stats, .. } = self;
        Self::split_child(root, 0, stats);
        stats.root_grows += 1;

        debug!(height = self.height(), "btree.root.grow");
    }

    /// Insert into the subtree at `node`, which is known not to be full.
    fn insert_non_full(node: &mut Node<K>, key: K, stats: &mut TreeStats) {
        let mut idx = node.find_index(&key);

        if node.is_leaf() {
            node.keys.insert(idx, key);
            return;
        }

        if node.children[idx].is_full() {
            Self::split_child(node, idx, stats);
            // The promoted median now sits at keys[idx].
            if key > node.keys[idx] {
                idx += 1;
            }
        }

        Self::insert_non_full(&mut node.children[idx], key, stats);
    }

    /// Split the full child at `index` of `parent`.
    ///
    /// ```text
    ///   parent: [ .. P .. ]             parent: [ .. M P .. ]
    ///                |          =>                 |  \
    ///   child: [ a b M c d ]          child: [ a b ]  [ c d ]
    /// ```
    /// The child keeps keys `0..t-1` (and children `0..t`), the median
    /// `keys[t-1]` moves up into the parent at `index`, and a new right
    /// sibling at `index + 1` takes keys `t..2t-1` (and children `t..2t`).
    fn split_child(parent: &mut Node<K>, index: usize, stats: &mut TreeStats) {
        let t = parent.min_degree();
        let child = &mut parent.children[index];
        debug_assert!(child.is_full(), "split of a non-full child");

        let mut sibling = Node::new(t, child.is_leaf());
        sibling.keys.extend(child.keys.drain(t..));
        let median = child.keys.remove(t - 1);
        if !child.is_leaf() {
            sibling.children.extend(child.children.drain(t..));
        }

        parent.keys.insert(index, median);
        parent.children.insert(index + 1, sibling);

        stats.splits += 1;
        trace!(index, median = ?median, "btree.split_child");
    }

    // ========================================================================
    // Public API: Delete
    // ========================================================================

    /// Delete `key`.
    ///
    /// # Errors
    /// - `Error::KeyNotFound` if `key` is not present (tree unchanged)
    pub fn delete(&mut self, key: &K) -> Result<()> {
        if !self.contains(key) {
            debug!(?key, "btree.delete.not_found");
            return Err(Error::KeyNotFound);
        }

        let Self { root, stats, .. } = self;
        Self::delete_from(root, key, stats);

        if self.root.keys.is_empty() && !self.root.is_leaf() {
            self.shrink_root();
        }

        self.len -= 1;
        self.stats.deletes += 1;
        Ok(())
    }

    /// Replace an empty internal root with its only child.
    ///
    /// This is the only way the tree loses height.
    fn shrink_root(&mut self) {
        debug_assert_eq!(self.root.children.len(), 1);

        if let Some(child) = self.root.children.pop() {
            self.root = child;
            self.stats.root_shrinks += 1;
            debug!(height = self.height(), "btree.root.shrink");
        }
    }

    /// Remove `key` from the subtree at `node`.
    ///
    /// `node` is either the root or has at least `t` keys, so it can lose
    /// one key (directly or through a merge below it) and stay legal.
    fn delete_from(node: &mut Node<K>, key: &K, stats: &mut TreeStats) {
        let idx = node.find_index(key);

        if node.holds_at(idx, key) {
            if node.is_leaf() {
                node.keys.remove(idx);
            } else {
                Self::delete_internal(node, idx, stats);
            }
            return;
        }

        // Membership is checked before the descent starts.
        debug_assert!(!node.is_leaf(), "key vanished during delete");
        if node.is_leaf() {
            return;
        }

        let mut idx = idx;
        if !node.children[idx].has_spare_key() {
            Self::fill(node, idx, stats);
            // Merging the last child into its left sibling removes index idx.
            if idx > node.keys.len() {
                idx -= 1;
            }
        }

        Self::delete_from(&mut node.children[idx], key, stats);
    }

    /// Remove `keys[idx]` from the internal `node`.
    fn delete_internal(node: &mut Node<K>, idx: usize, stats: &mut TreeStats) {
        let key = node.keys[idx];

        if node.children[idx].has_spare_key() {
            let pred = Self::rightmost_key(&node.children[idx]);
            node.keys[idx] = pred;
            Self::delete_from(&mut node.children[idx], &pred, stats);
        } else if node.children[idx + 1].has_spare_key() {
            let succ = Self::leftmost_key(&node.children[idx + 1]);
            node.keys[idx] = succ;
            Self::delete_from(&mut node.children[idx + 1], &succ, stats);
        } else {
            Self::merge_children(node, idx, stats);
            Self::delete_from(&mut node.children[idx], &key, stats);
        }
    }

    /// Largest key in the subtree (the predecessor of its parent separator).
    fn rightmost_key(node: &Node<K>) -> K {
        let mut current = node;
        while let Some(child) = current.children.last() {
            current = child;
        }
        current.keys[current.keys.len() - 1]
    }

    /// Smallest key in the subtree (the successor of its parent separator).
    fn leftmost_key(node: &Node<K>) -> K {
        let mut current = node;
        while let Some(child) = current.children.first() {
            current = child;
        }
        current.keys[0]
    }

    /// Bring `children[idx]` of `node` up to at least `t` keys.
    fn fill(node: &mut Node<K>, idx: usize, stats: &mut TreeStats) {
        let has_left = idx > 0;
        let has_right = idx < node.keys.len();

        if has_left && node.children[idx - 1].has_spare_key() {
            Self::borrow_from_prev(node, idx, stats);
        } else if has_right && node.children[idx + 1].has_spare_key() {
            Self::borrow_from_next(node, idx, stats);
        } else if has_right {
            Self::merge_children(node, idx, stats);
        } else {
            Self::merge_children(node, idx - 1, stats);
        }
    }

    /// Rotate one key from the left sibling of `children[idx]` through the
    /// parent separator.
    fn borrow_from_prev(node: &mut Node<K>, idx: usize, stats: &mut TreeStats) {
        let (left, right) = node.children.split_at_mut(idx);
        let sibling = &mut left[idx - 1];
        let child = &mut right[0];

        let up = sibling.keys.remove(sibling.keys.len() - 1);
        let down = mem::replace(&mut node.keys[idx - 1], up);
        child.keys.insert(0, down);

        if !child.is_leaf() {
            let moved = sibling.children.remove(sibling.children.len() - 1);
            child.children.insert(0, moved);
        }

        stats.borrows_left += 1;
        trace!(idx, "btree.borrow_from_prev");
    }

    /// Rotate one key from the right sibling of `children[idx]` through the
    /// parent separator.
    fn borrow_from_next(node: &mut Node<K>, idx: usize, stats: &mut TreeStats) {
        let (left, right) = node.children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];

        let up = sibling.keys.remove(0);
        let down = mem::replace(&mut node.keys[idx], up);
        child.keys.push(down);

        if !child.is_leaf() {
            let moved = sibling.children.remove(0);
            child.children.push(moved);
        }

        stats.borrows_right += 1;
        trace!(idx, "btree.borrow_from_next");
    }

    /// Merge `children[idx + 1]` and the separator `keys[idx]` into
    /// `children[idx]`.
    ///
    /// Both children hold `t - 1` keys, so the result holds `2t - 1`.
    fn merge_children(node: &mut Node<K>, idx: usize, stats: &mut TreeStats) {
        let separator = node.keys.remove(idx);
        let Node {
            keys: sibling_keys,
            children: sibling_children,
            ..
        } = node.children.remove(idx + 1);

        let child = &mut node.children[idx];
        child.keys.push(separator);
        child.keys.extend(sibling_keys);
        child.children.extend(sibling_children);
        debug_assert!(child.key_count() <= max_keys(child.min_degree()));

        stats.merges += 1;
        trace!(idx, separator = ?separator, "btree.merge_children");
    }
}

impl<K: Key> Default for BTree<K> {
    fn default() -> Self {
        Self::with_degree(DEFAULT_MIN_DEGREE)
    }
}
