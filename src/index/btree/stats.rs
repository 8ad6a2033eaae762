//! Restructuring statistics for the B-tree.

use std::fmt;

/// Counters for the structural work a tree has done.
///
/// The tree is owned by a single caller and mutated through `&mut self`,
/// so these are plain integers rather than atomics. `BTree::stats` hands
/// out a copy.
///
/// # Example
/// ```
/// use degree_btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for key in 1..=3 {
///     tree.insert(key).unwrap();
/// }
/// tree.insert(4).unwrap(); // root was full: split and grow
///
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 4);
/// assert_eq!(stats.root_grows, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Successful inserts.
    pub inserts: u64,

    /// Successful deletes.
    pub deletes: u64,

    /// Full nodes split in two, root splits included.
    pub splits: u64,

    /// Times the root was split and the tree grew by one level.
    pub root_grows: u64,

    /// Sibling pairs merged around their separator.
    pub merges: u64,

    /// Keys rotated in from a left sibling.
    pub borrows_left: u64,

    /// Keys rotated in from a right sibling.
    pub borrows_right: u64,

    /// Times an empty internal root was replaced by its only child.
    pub root_shrinks: u64,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows from either side.
    pub fn borrows(&self) -> u64 {
        self.borrows_left + self.borrows_right
    }

    /// Net change in height since the counters were last reset.
    pub fn height_delta(&self) -> i64 {
        self.root_grows as i64 - self.root_shrinks as i64
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, deletes: {}, splits: {}, merges: {}, borrows: {}, height_delta: {} }}",
            self.inserts,
            self.deletes,
            self.splits,
            self.merges,
            self.borrows(),
            self.height_delta()
        )
    }
}

/// Point-in-time shape of a tree, computed by a full walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeShape {
    /// Same convention as `BTree::height`.
    pub height: usize,

    /// Total nodes, root included.
    pub nodes: usize,

    /// Leaf nodes.
    pub leaves: usize,

    /// Total keys.
    pub keys: usize,
}

impl TreeShape {
    /// Average keys per node (0.0 for an empty tree).
    pub fn fill_factor(&self) -> f64 {
        if self.nodes == 0 || self.keys == 0 {
            0.0
        } else {
            self.keys as f64 / self.nodes as f64
        }
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shape {{ height: {}, nodes: {}, leaves: {}, keys: {}, keys_per_node: {:.2} }}",
            self.height,
            self.nodes,
            self.leaves,
            self.keys,
            self.fill_factor()
        )
    }
}
