//! Offsets accepted by the indexed accessors on rows and tables

use crate::error::{Result, TableError};

/// Position argument for `get`, `set`, `delete` and `exists`.
///
/// Only [`Offset::Index`] addresses an element. A [`Offset::Key`] is never a
/// valid position and is rejected before any bounds check; [`Offset::Append`]
/// is accepted by `set` only, where it appends.
///
/// Integer offsets are held as `i128` so every `i64` and `usize` argument is
/// reported unchanged in an out-of-range error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offset {
    Index(i128),
    Key(String),
    Append,
}

impl Offset {
    /// Resolve against a collection holding `len` elements
    pub(crate) fn resolve(&self, len: usize) -> Result<usize> {
        match self {
            Offset::Index(index) => usize::try_from(*index)
                .ok()
                .filter(|&i| i < len)
                .ok_or(TableError::OutOfRange { index: *index, len }),
            Offset::Key(_) | Offset::Append => {
                Err(TableError::InvalidArgument("index must be an integer"))
            }
        }
    }
}

impl From<i64> for Offset {
    fn from(index: i64) -> Self {
        Offset::Index(i128::from(index))
    }
}

impl From<i32> for Offset {
    fn from(index: i32) -> Self {
        Offset::Index(i128::from(index))
    }
}

impl From<usize> for Offset {
    fn from(index: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Offset::Index(index as i128)
    }
}

impl From<&str> for Offset {
    fn from(key: &str) -> Self {
        Offset::Key(key.to_string())
    }
}

impl From<String> for Offset {
    fn from(key: String) -> Self {
        Offset::Key(key)
    }
}

impl From<Option<i64>> for Offset {
    fn from(index: Option<i64>) -> Self {
        match index {
            Some(i) => Offset::from(i),
            None => Offset::Append,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_bounds() {
        assert_eq!(Offset::from(0).resolve(3).unwrap(), 0);
        assert_eq!(Offset::from(2usize).resolve(3).unwrap(), 2);
    }

    #[test]
    fn test_resolve_out_of_bounds() {
        assert!(matches!(
            Offset::from(-1).resolve(3),
            Err(TableError::OutOfRange { index: -1, len: 3 })
        ));
        assert!(matches!(
            Offset::from(3).resolve(3),
            Err(TableError::OutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            Offset::from(0).resolve(0),
            Err(TableError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_non_integer_rejected_before_bounds() {
        // An empty collection would fail any bounds check, but keys fail first.
        assert!(matches!(
            Offset::from("name").resolve(0),
            Err(TableError::InvalidArgument(_))
        ));
        assert!(matches!(
            Offset::from(None::<i64>).resolve(0),
            Err(TableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_huge_offsets_are_reported_unchanged() {
        match Offset::from(usize::MAX).resolve(10) {
            Err(TableError::OutOfRange { index, len }) => {
                assert_eq!(index, usize::MAX as i128);
                assert_eq!(len, 10);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        match Offset::from(i64::MIN).resolve(10) {
            Err(TableError::OutOfRange { index, .. }) => assert_eq!(index, i128::from(i64::MIN)),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
