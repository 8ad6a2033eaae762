//! Key type bound.

use std::fmt;

/// A value that can be stored as a key in the tree.
///
/// Keys are small totally-ordered scalars that are cheap to copy, so the
/// tree can move them between nodes during splits, merges and borrows
/// without cloning. Floating-point types are not keys: `NaN` breaks the
/// total order the separation invariant relies on.
///
/// # Example
/// ```
/// use degree_btree::{BTree, Key};
///
/// fn first_two<K: Key>(tree: &BTree<K>) -> Vec<K> {
///     tree.keys().into_iter().take(2).collect()
/// }
///
/// let mut tree: BTree<u32> = BTree::new(2).unwrap();
/// tree.insert(7).unwrap();
/// tree.insert(3).unwrap();
/// assert_eq!(first_two(&tree), vec![3, 7]);
/// ```
pub trait Key: Copy + Ord + fmt::Debug {}

macro_rules! impl_key {
    ($($ty:ty),* $(,)?) => {
        $(impl Key for $ty {})*
    };
}

impl_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

#[cfg(test)]
mod tests {
    use super::*;

    fn largest<K: Key>(keys: &[K]) -> Option<K> {
        keys.iter().copied().max()
    }

    #[test]
    fn test_integer_keys() {
        assert_eq!(largest(&[3i64, -9, 12]), Some(12));
        assert_eq!(largest(&[3u8, 200, 12]), Some(200));
    }

    #[test]
    fn test_char_keys() {
        assert_eq!(largest(&['a', 'z', 'm']), Some('z'));
    }

    #[test]
    fn test_empty() {
        assert_eq!(largest::<u64>(&[]), None);
    }
}
