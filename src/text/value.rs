//! Immutable text value snapshots.

use crate::error::{Error, Result};
use crate::unicode::floor_char_boundary;
use std::fmt;
use std::ops::{Deref, Range};
use std::sync::Arc;

/// Immutable UTF-8 text value.
///
/// Cloning is cheap: clones share one allocation. Producing a modified value
/// always allocates a new one, so a `TextValue` handed out earlier never
/// changes underneath its holder.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TextValue {
    text: Arc<str>,
}

impl TextValue {
    /// Create an empty value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrow the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get a slice of the value.
    ///
    /// The range must lie within the value. Range ends that split a code
    /// point are moved back onto the code point start.
    pub fn slice(&self, range: Range<usize>) -> Result<&str> {
        let range = self.checked_range(range)?;
        Ok(&self.text[range])
    }

    /// Produce a new value with `range` replaced by `with`.
    pub fn replace(&self, range: Range<usize>, with: &str) -> Result<Self> {
        let range = self.checked_range(range)?;
        let mut out = String::with_capacity(self.len() - range.len() + with.len());
        out.push_str(&self.text[..range.start]);
        out.push_str(with);
        out.push_str(&self.text[range.end..]);
        Ok(Self::from(out))
    }

    /// Clamp `offset` into the value and snap it onto a code point boundary.
    #[must_use]
    pub fn floor_boundary(&self, offset: usize) -> usize {
        floor_char_boundary(&self.text, offset)
    }

    /// Validate that `offset` is in range and on a code point boundary.
    pub fn check_boundary(&self, offset: usize) -> Result<()> {
        if offset > self.len() {
            return Err(Error::OutOfRange {
                start: offset,
                end: offset,
                len: self.len(),
            });
        }
        if !self.text.is_char_boundary(offset) {
            return Err(Error::InvalidBoundary { offset });
        }
        Ok(())
    }

    fn checked_range(&self, range: Range<usize>) -> Result<Range<usize>> {
        checked_range(&self.text, range)
    }
}

/// Validate a byte range against `text`, snapping both ends to code point
/// boundaries.
pub(crate) fn checked_range(text: &str, range: Range<usize>) -> Result<Range<usize>> {
    if range.start > range.end || range.end > text.len() {
        return Err(Error::OutOfRange {
            start: range.start,
            end: range.end,
            len: text.len(),
        });
    }
    Ok(floor_char_boundary(text, range.start)..floor_char_boundary(text, range.end))
}

impl Deref for TextValue {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for TextValue {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for TextValue {
    fn from(s: &str) -> Self {
        Self { text: Arc::from(s) }
    }
}

impl From<String> for TextValue {
    fn from(s: String) -> Self {
        Self {
            text: Arc::from(s),
        }
    }
}

impl PartialEq<str> for TextValue {
    fn eq(&self, other: &str) -> bool {
        &*self.text == other
    }
}

impl PartialEq<&str> for TextValue {
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}

impl fmt::Debug for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.text, f)
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_produces_new_value() {
        let original = TextValue::from("Hello World");
        let edited = original.replace(5..11, "!").unwrap();
        assert_eq!(edited, "Hello!");
        assert_eq!(original, "Hello World");
    }

    #[test]
    fn test_replace_out_of_range() {
        let value = TextValue::from("abc");
        let err = value.replace(2..9, "x").unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                start: 2,
                end: 9,
                len: 3
            }
        );
        assert!(value.replace(3..2, "").is_err());
    }

    #[test]
    fn test_empty_replace_is_identity() {
        let value = TextValue::from("caret");
        assert_eq!(value.replace(2..2, "").unwrap(), value);
    }

    #[test]
    fn test_slice_snaps_to_char_boundary() {
        let value = TextValue::from("a€b");
        // 2 and 3 fall inside '€'
        assert_eq!(value.slice(0..2).unwrap(), "a");
        assert_eq!(value.slice(1..5).unwrap(), "€b");
    }

    #[test]
    fn test_check_boundary() {
        let value = TextValue::from("a€b");
        assert!(value.check_boundary(1).is_ok());
        assert_eq!(
            value.check_boundary(2),
            Err(Error::InvalidBoundary { offset: 2 })
        );
        assert!(matches!(
            value.check_boundary(6),
            Err(Error::OutOfRange { .. })
        ));
        assert_eq!(value.floor_boundary(3), 1);
    }
}
