//! Error type for range validation.

use core::fmt::{Display, Formatter, Result};
use std::error::Error;

/// Error returned when a sort range does not fit inside the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// `first <= last` but `last` (and possibly `first`) is not a valid index.
    OutOfRange {
        /// Inclusive start of the requested range.
        first: usize,
        /// Inclusive end of the requested range.
        last: usize,
        /// Length of the buffer.
        len: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::OutOfRange { first, last, len } => {
                write!(f, "Range [{first}, {last}] out of bounds for buffer of length {len}")
            }
        }
    }
}

impl Error for SortError {}

/// Checks `[first, last]` against a buffer of `len` elements.
///
/// `first > last` is an empty range and always valid.
pub(crate) fn check_range(
    first: usize,
    last: usize,
    len: usize,
) -> core::result::Result<(), SortError> {
    if first <= last && last >= len {
        return Err(SortError::OutOfRange { first, last, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ranges() {
        assert_eq!(check_range(0, 4, 5), Ok(()));
        assert_eq!(check_range(3, 3, 5), Ok(()));
        assert_eq!(check_range(4, 2, 5), Ok(()));
        assert_eq!(check_range(9, 0, 5), Ok(()));
        assert_eq!(check_range(1, 0, 0), Ok(()));
    }

    #[test]
    fn invalid_ranges() {
        assert_eq!(
            check_range(0, 5, 5),
            Err(SortError::OutOfRange {
                first: 0,
                last: 5,
                len: 5
            })
        );
        assert!(check_range(7, 9, 5).is_err());
        assert!(check_range(0, 0, 0).is_err());
        assert!(check_range(0, usize::MAX, 8).is_err());
    }

    #[test]
    fn message_names_bounds() {
        let err = SortError::OutOfRange {
            first: 2,
            last: 10,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "Range [2, 10] out of bounds for buffer of length 4"
        );
    }
}
