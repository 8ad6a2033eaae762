//! Error types for the B-tree index.

use thiserror::Error;

use crate::common::config::MIN_DEGREE;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All caller-facing errors.
///
/// Each variant is a precondition violation by the caller. None of them
/// leave the tree modified. Broken structural invariants are bugs, not
/// errors, and are reported by `BTree::check` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested minimum degree is below [`MIN_DEGREE`].
    #[error("invalid minimum degree {0} (must be at least {min})", min = MIN_DEGREE)]
    InvalidMinDegree(usize),

    /// Insert was called with a key that is already in the tree.
    #[error("key already exists in the tree")]
    DuplicateKey,

    /// Delete was called with a key that is not in the tree.
    #[error("key does not exist in the tree")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMinDegree(1);
        assert_eq!(
            format!("{}", err),
            "invalid minimum degree 1 (must be at least 2)"
        );

        assert_eq!(
            format!("{}", Error::DuplicateKey),
            "key already exists in the tree"
        );
        assert_eq!(
            format!("{}", Error::KeyNotFound),
            "key does not exist in the tree"
        );
    }

    #[test]
    fn test_errors_are_distinct() {
        assert_ne!(Error::DuplicateKey, Error::KeyNotFound);
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail(fail: bool) -> Result<u32> {
            if fail {
                Err(Error::KeyNotFound)
            } else {
                Ok(42)
            }
        }

        assert_eq!(might_fail(false), Ok(42));
        assert_eq!(might_fail(true), Err(Error::KeyNotFound));
    }
}
