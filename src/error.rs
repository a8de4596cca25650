//! Error types for textcore.

use std::fmt;

/// Result type alias for textcore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text value operations.
///
/// Neither variant is reachable through the caret API: caret requests are
/// clamped and snapped before they touch the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A byte range falls outside the current value.
    OutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },
    /// A byte offset does not fall on a code point boundary.
    InvalidBoundary { offset: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { start, end, len } => {
                write!(f, "byte range {start}..{end} out of range for value of length {len}")
            }
            Self::InvalidBoundary { offset } => {
                write!(f, "byte offset {offset} is not on a character boundary")
            }
        }
    }
}

impl std::error::Error for Error {}
