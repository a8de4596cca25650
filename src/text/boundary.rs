//! Word and line boundary scanning.
//!
//! A *word* is a maximal run of graphemes of one [`CharClass`], plus the
//! whitespace that follows it. Whitespace always attaches to the word before
//! it; a change between alphanumeric and symbol graphemes always ends a word.
//!
//! Line breaks follow ropey's Unicode line-break set (LF, CR, CRLF, VT, FF,
//! NEL, LS, PS), shared with the layout code through [`logical_lines`].

use ropey::str_utils::{byte_to_line_idx, line_to_byte_idx};
use std::borrow::Cow;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Character class used for word scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Alphanumeric,
    Symbol,
}

impl CharClass {
    /// Classify a grapheme by its first character.
    #[must_use]
    pub fn of(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some(c) if c.is_whitespace() => Self::Whitespace,
            Some(c) if c.is_alphanumeric() => Self::Alphanumeric,
            _ => Self::Symbol,
        }
    }
}

/// Return the word at the front of `text`.
///
/// Trailing whitespace is part of the word unless `exclude_whitespace` is
/// set, in which case scanning stops at the first whitespace grapheme.
///
/// ```
/// use textcore::text::word_front;
///
/// assert_eq!(word_front("Hello World", false), "Hello ");
/// assert_eq!(word_front("Hello World", true), "Hello");
/// assert_eq!(word_front("foo.bar", false), "foo");
/// ```
#[must_use]
pub fn word_front(text: &str, exclude_whitespace: bool) -> &str {
    let mut class = None;
    let mut trailing = false;
    let mut end = 0;

    for (idx, grapheme) in text.grapheme_indices(true) {
        let current = CharClass::of(grapheme);
        match class {
            None => class = Some(current),
            Some(_) if trailing => {
                if current != CharClass::Whitespace {
                    break;
                }
            }
            Some(word) if current != word => {
                if current == CharClass::Whitespace && !exclude_whitespace {
                    trailing = true;
                } else {
                    break;
                }
            }
            Some(_) => {}
        }
        end = idx + grapheme.len();
    }

    &text[..end]
}

/// Return the word at the back of `text`.
///
/// Mirror of [`word_front`]: whitespace at the end of `text` belongs to the
/// word before it, so it is consumed first unless `exclude_whitespace` is set.
///
/// ```
/// use textcore::text::word_back;
///
/// assert_eq!(word_back("Hello World", false), "World");
/// assert_eq!(word_back("Hello ", false), "Hello ");
/// assert_eq!(word_back("Hello ", true), " ");
/// ```
#[must_use]
pub fn word_back(text: &str, exclude_whitespace: bool) -> &str {
    let mut class = None;
    let mut start = text.len();

    for (idx, grapheme) in text.grapheme_indices(true).rev() {
        let current = CharClass::of(grapheme);
        match class {
            None if current == CharClass::Whitespace && !exclude_whitespace => {}
            None => class = Some(current),
            Some(word) if current != word => break,
            Some(_) => {}
        }
        start = idx;
    }

    &text[start..]
}

/// Byte range of the word touching `offset`, whitespace excluded on both sides.
///
/// When `offset` sits between two different classes, the word after it wins
/// unless that word is whitespace. `offset` must be a code point boundary of
/// `text`.
#[must_use]
pub fn word_range_at(text: &str, offset: usize) -> Range<usize> {
    let (head, tail) = text.split_at(offset);
    let before = word_back(head, true);
    let after = word_front(tail, true);
    let class_before = head.graphemes(true).next_back().map(CharClass::of);
    let class_after = tail.graphemes(true).next().map(CharClass::of);

    match (class_before, class_after) {
        (Some(b), Some(a)) if a == b => offset - before.len()..offset + after.len(),
        (_, Some(a)) if a != CharClass::Whitespace => offset..offset + after.len(),
        (Some(_), _) => offset - before.len()..offset,
        _ => offset..offset + after.len(),
    }
}

/// Check whether `c` starts or forms a line break.
#[must_use]
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Length in bytes of the line break ending `text`, or 0 if there is none.
#[must_use]
pub fn trailing_break_len(text: &str) -> usize {
    if text.ends_with("\r\n") {
        return 2;
    }
    match text.chars().next_back() {
        Some(c) if is_line_break(c) => c.len_utf8(),
        _ => 0,
    }
}

/// Replace every line break sequence with a single space.
///
/// ```
/// use textcore::text::normalize_line_breaks;
///
/// assert_eq!(normalize_line_breaks("a\r\nb\nc"), "a b c");
/// ```
#[must_use]
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_line_break) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
        }
        out.push(if is_line_break(c) { ' ' } else { c });
    }
    Cow::Owned(out)
}

/// Content of the first line of `text`, without its line break.
#[must_use]
pub fn line_front(text: &str) -> &str {
    let next = line_to_byte_idx(text, 1);
    &text[..next - trailing_break_len(&text[..next])]
}

/// Content of the last line of `text`.
#[must_use]
pub fn line_back(text: &str) -> &str {
    let last = byte_to_line_idx(text, text.len());
    &text[line_to_byte_idx(text, last)..]
}

/// Byte range of the line content enclosing `offset`.
///
/// `offset` must be a code point boundary of `text`.
#[must_use]
pub fn line_range_at(text: &str, offset: usize) -> Range<usize> {
    let before = line_back(&text[..offset]);
    let after = line_front(&text[offset..]);
    offset - before.len()..offset + after.len()
}

/// One logical (explicitly broken) line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogicalLine {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset where the content ends and the line break begins.
    pub end: usize,
    /// Byte offset of the next line's start (`end` plus the break length).
    pub next: usize,
}

impl LogicalLine {
    /// Content range, line break excluded.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the line is terminated by a line break.
    #[must_use]
    pub fn has_break(&self) -> bool {
        self.next > self.end
    }
}

/// Iterator over the logical lines of a text.
///
/// A text ending in a line break yields a final empty line, so every caret
/// offset belongs to exactly one line.
pub struct LogicalLines<'a> {
    text: &'a str,
    start: Option<usize>,
}

impl Iterator for LogicalLines<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<LogicalLine> {
        let start = self.start?;
        let rest = &self.text[start..];
        let next = start + line_to_byte_idx(rest, 1);
        let end = next - trailing_break_len(&self.text[start..next]);
        self.start = (next > end).then_some(next);
        Some(LogicalLine { start, end, next })
    }
}

/// Iterate the logical lines of `text`.
///
/// ```
/// use textcore::text::logical_lines;
///
/// let ranges: Vec<_> = logical_lines("ab\r\ncd\n").map(|l| l.range()).collect();
/// assert_eq!(ranges, vec![0..2, 4..6, 7..7]);
/// ```
#[must_use]
pub fn logical_lines(text: &str) -> LogicalLines<'_> {
    LogicalLines {
        text,
        start: Some(0),
    }
}
