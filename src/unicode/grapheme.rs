//! Grapheme cluster iteration and caret boundaries.
//!
//! The caret only ever rests on grapheme boundaries when moved by the
//! keyboard; offsets supplied from outside are snapped to code point
//! boundaries with [`floor_char_boundary`].

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Clamp a byte offset into `[0, s.len()]` and move it back onto a code
/// point boundary.
///
/// ```
/// use textcore::unicode::floor_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(floor_char_boundary(s, 2), 1);
/// assert_eq!(floor_char_boundary(s, 4), 4);
/// assert_eq!(floor_char_boundary(s, 100), 5);
/// ```
#[must_use]
pub fn floor_char_boundary(s: &str, offset: usize) -> usize {
    let mut offset = offset.min(s.len());
    while offset > 0 && !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Find the grapheme boundary before `offset`. Returns 0 at the start.
#[must_use]
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(s, offset);
    s[..offset]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(idx, _)| idx)
}

/// Find the grapheme boundary after `offset`. Returns `s.len()` at the end.
#[must_use]
pub fn next_grapheme_boundary(s: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(s, offset);
    s[offset..]
        .graphemes(true)
        .next()
        .map_or(s.len(), |g| offset + g.len())
}

/// All grapheme boundaries of `s`, including `0` and `s.len()`.
#[must_use]
pub fn grapheme_boundaries(s: &str) -> Vec<usize> {
    let mut out: Vec<usize> = s.grapheme_indices(true).map(|(idx, _)| idx).collect();
    if out.first().copied() != Some(0) {
        out.insert(0, 0);
    }
    if out.last().copied() != Some(s.len()) {
        out.push(s.len());
    }
    out
}
