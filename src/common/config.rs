//! Configuration constants for the B-tree index.

/// Smallest legal minimum degree `t`.
///
/// With `t = 2` every non-root node holds 1 to 3 keys (a 2-3-4 tree).
/// Anything smaller cannot split a full node into two valid halves.
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by `BTree::default()`.
pub const DEFAULT_MIN_DEGREE: usize = 2;

/// Maximum number of keys a node may hold: `2t - 1`.
///
/// A node at this size is "full" and must be split before an insert
/// descends through it.
#[inline]
pub const fn max_keys(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum number of keys a non-root node may hold: `t - 1`.
#[inline]
pub const fn min_keys(min_degree: usize) -> usize {
    min_degree - 1
}

/// Maximum number of children an internal node may have: `2t`.
#[inline]
pub const fn max_children(min_degree: usize) -> usize {
    2 * min_degree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_bounds() {
        assert_eq!(max_keys(2), 3);
        assert_eq!(min_keys(2), 1);
        assert_eq!(max_children(2), 4);

        assert_eq!(max_keys(5), 9);
        assert_eq!(min_keys(5), 4);
        assert_eq!(max_children(5), 10);
    }

    #[test]
    fn test_split_halves_are_legal() {
        // Splitting a full node leaves t-1 keys on each side plus one median.
        for t in MIN_DEGREE..16 {
            assert_eq!(2 * min_keys(t) + 1, max_keys(t));
        }
    }

    #[test]
    fn test_default_is_legal() {
        assert!(DEFAULT_MIN_DEGREE >= MIN_DEGREE);
    }
}
