//! Wrap-aware mapping between byte offsets and visual positions.
//!
//! Text is split into logical lines at explicit line breaks, then each
//! logical line is split into visual rows by greedy word wrap: a word (see
//! [`word_front`]) is never broken, and a row takes words until the next
//! word's visible part would overflow the available width. Whitespace after
//! a word hangs at the end of its row and does not count against the width.
//!
//! Caret positions refer to the *bottom* of the caret's row: a caret at
//! `(x, y)` is drawn from `y - line_height` to `y`. Hit testing picks the
//! row whose vertical center is closest to the query point, preferring the
//! earlier row on ties, so a caret position always maps back to its own row.

// Layout builders are long but linear
#![allow(clippy::too_many_lines)]

use crate::geometry::{Point, Rect, Size};
use crate::text::boundary::{logical_lines, word_front};
use crate::text::typeface::Typeface;
use crate::unicode::{floor_char_boundary, grapheme_indices};
use std::borrow::Cow;
use std::ops::Range;

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// No soft wrapping; rows end only at explicit line breaks.
    None,
    /// Greedy word wrap with unbreakable words.
    #[default]
    Word,
}

/// One visual row of laid out text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualRow {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset where the row's content ends. An explicit line break
    /// following the row is not included.
    pub end: usize,
    /// Measured width of the row content, hanging whitespace included.
    pub width: f32,
    /// `true` when the row ends at an explicit line break or the end of the
    /// text, `false` when it ends at an implicit wrap point.
    pub hard: bool,
}

impl VisualRow {
    /// Content range of the row.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the row ends at an implicit wrap point.
    #[must_use]
    pub fn is_soft_wrapped(&self) -> bool {
        !self.hard
    }
}

/// Split `text` into visual rows.
///
/// `width` of `None` (or [`WrapMode::None`]) disables soft wrapping.
#[must_use]
pub fn layout_rows(
    text: &str,
    typeface: &dyn Typeface,
    wrap: WrapMode,
    width: Option<f32>,
) -> Vec<VisualRow> {
    let mut rows = Vec::new();
    let wrap_width = match wrap {
        WrapMode::Word => width,
        WrapMode::None => None,
    };

    for line in logical_lines(text) {
        let Some(wrap_width) = wrap_width else {
            rows.push(VisualRow {
                start: line.start,
                end: line.end,
                width: typeface.measure(&text[line.range()]),
                hard: true,
            });
            continue;
        };

        let mut row_start = line.start;
        let mut pos = line.start;
        while pos < line.end {
            let word = word_front(&text[pos..line.end], false);
            if word.is_empty() {
                break;
            }
            let visible_end = pos + word.trim_end_matches(char::is_whitespace).len();
            if pos > row_start && typeface.measure(&text[row_start..visible_end]) > wrap_width {
                rows.push(VisualRow {
                    start: row_start,
                    end: pos,
                    width: typeface.measure(&text[row_start..pos]),
                    hard: false,
                });
                row_start = pos;
            }
            pos += word.len();
        }

        rows.push(VisualRow {
            start: row_start,
            end: line.end,
            width: typeface.measure(&text[row_start..line.end]),
            hard: true,
        });
    }

    rows
}

/// Result of hit testing a visual point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Offset nearest to the point.
    pub offset: usize,
    /// Row the point resolved to.
    pub row: usize,
    /// Wrap point preference that renders `offset` on `row`.
    pub prefer_next_line: bool,
}

/// Cache key: any change to one of these fields invalidates the rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutKey {
    /// Revision of the text store the rows were built from.
    pub revision: u64,
    /// Available width, or `None` for unbounded.
    pub width: Option<f32>,
    pub wrap: WrapMode,
    /// Bumped whenever the typeface or style changes.
    pub typeface_revision: u64,
}

/// Cached visual rows for one editor.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    key: Option<LayoutKey>,
    rows: Vec<VisualRow>,
}

impl LayoutCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached rows were built for `key`.
    #[must_use]
    pub fn is_valid_for(&self, key: &LayoutKey) -> bool {
        self.key.as_ref() == Some(key)
    }

    /// Get rows for `key`, rebuilding them if the key changed.
    pub fn rows_for(&mut self, key: LayoutKey, text: &str, typeface: &dyn Typeface) -> &[VisualRow] {
        if !self.is_valid_for(&key) {
            self.rows = layout_rows(text, typeface, key.wrap, key.width);
            self.key = Some(key);
        }
        &self.rows
    }
}

/// Laid out text for one measurement pass.
///
/// Borrows the text and typeface; holds no state beyond the rows.
pub struct TextLayout<'a> {
    text: &'a str,
    typeface: &'a dyn Typeface,
    rows: Cow<'a, [VisualRow]>,
    line_height: f32,
}

impl<'a> TextLayout<'a> {
    /// Lay out `text` from scratch.
    #[must_use]
    pub fn new(
        text: &'a str,
        typeface: &'a dyn Typeface,
        wrap: WrapMode,
        width: Option<f32>,
    ) -> Self {
        let rows = layout_rows(text, typeface, wrap, width);
        Self::from_rows(text, typeface, Cow::Owned(rows))
    }

    /// Wrap rows that were built for `text` (typically from a [`LayoutCache`]).
    #[must_use]
    pub fn from_rows(
        text: &'a str,
        typeface: &'a dyn Typeface,
        rows: Cow<'a, [VisualRow]>,
    ) -> Self {
        Self {
            text,
            typeface,
            rows,
            line_height: typeface.line_height(),
        }
    }

    /// The visual rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[VisualRow] {
        &self.rows
    }

    /// Number of visual rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Height of one row.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Overall visual size of the text.
    #[must_use]
    pub fn size(&self) -> Size {
        let width = self.rows.iter().map(|row| row.width).fold(0.0, f32::max);
        Size::new(width, self.rows.len() as f32 * self.line_height)
    }

    /// Visual size of a slice laid out at the same wrap settings.
    ///
    /// Slice ends are clamped and snapped to code point boundaries.
    #[must_use]
    pub fn measure_slice(&self, range: Range<usize>, wrap: WrapMode, width: Option<f32>) -> Size {
        let start = floor_char_boundary(self.text, range.start);
        let end = floor_char_boundary(self.text, range.end).max(start);
        TextLayout::new(&self.text[start..end], self.typeface, wrap, width).size()
    }

    /// Index of the row holding `offset`.
    ///
    /// An offset at an implicit wrap point belongs to both the tail of one
    /// row and the head of the next; `prefer_next_line` picks the latter.
    #[must_use]
    pub fn row_for_offset(&self, offset: usize, prefer_next_line: bool) -> usize {
        let last = self.rows.len().saturating_sub(1);
        for (idx, row) in self.rows.iter().enumerate() {
            if offset < row.end {
                return idx;
            }
            if offset == row.end {
                if row.hard || !prefer_next_line || idx == last {
                    return idx;
                }
                return idx + 1;
            }
            // Inside a multi-byte line break, between this row and the next.
            if self.rows.get(idx + 1).is_some_and(|next| offset < next.start) {
                return idx;
            }
        }
        last
    }

    /// Visual caret position for `offset`.
    ///
    /// `y` is the bottom of the caret's row.
    #[must_use]
    pub fn caret_position(&self, offset: usize, prefer_next_line: bool) -> Point {
        let offset = floor_char_boundary(self.text, offset);
        let idx = self.row_for_offset(offset, prefer_next_line);
        let Some(row) = self.rows.get(idx) else {
            return Point::new(0.0, self.line_height);
        };
        let end = offset.clamp(row.start, row.end);
        Point::new(
            self.typeface.measure(&self.text[row.start..end]),
            self.row_bottom(idx),
        )
    }

    /// Index of the row whose vertical center is closest to `y`.
    ///
    /// A later row only wins when it is strictly closer, so a point exactly
    /// halfway between two centers (the bottom edge of a row) resolves to the
    /// earlier row. The halfway point is compared against
    /// [`Self::row_bottom`], the same value [`Self::caret_position`] reports,
    /// so a caret position always resolves to its own row.
    #[must_use]
    pub fn nearest_row(&self, y: f32) -> usize {
        let last = self.rows.len().saturating_sub(1);
        (0..last).find(|&idx| y <= self.row_bottom(idx)).unwrap_or(last)
    }

    /// Bottom edge of row `idx`.
    #[must_use]
    pub fn row_bottom(&self, idx: usize) -> f32 {
        (idx + 1) as f32 * self.line_height
    }

    /// Offset within row `idx` closest to horizontal position `x`.
    ///
    /// Each character boundary wins if `x` lies right of the midpoint between
    /// it and the previous boundary.
    #[must_use]
    pub fn nearest_offset_in_row(&self, idx: usize, x: f32) -> usize {
        let Some(row) = self.rows.get(idx) else {
            return self.text.len();
        };
        let mut previous = row.start;
        let mut previous_x = 0.0;
        for (rel, grapheme) in grapheme_indices(&self.text[row.range()]) {
            let end = row.start + rel + grapheme.len();
            let current_x = self.typeface.measure(&self.text[row.start..end]);
            if x < (previous_x + current_x) / 2.0 {
                return previous;
            }
            previous = end;
            previous_x = current_x;
        }
        row.end
    }

    /// Offset nearest to a visual point.
    #[must_use]
    pub fn nearest_offset(&self, point: Point) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        self.nearest_offset_in_row(self.nearest_row(point.y), point.x)
    }

    /// Hit test a visual point, reporting which row it landed on.
    ///
    /// An offset at the head of a soft-wrapped row is also the tail of the
    /// row above; the returned preference keeps the caret on the row that
    /// was hit.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Hit {
        let row = self.nearest_row(point.y);
        let offset = self.nearest_offset_in_row(row, point.x);
        let prefer_next_line = self.rows.get(row).is_some_and(|r| offset == r.start);
        Hit {
            offset,
            row,
            prefer_next_line,
        }
    }

    /// Rectangles covering the selection `low..high`, one per touched row.
    #[must_use]
    pub fn selection_rects(&self, low: usize, high: usize) -> Vec<Rect> {
        let mut rects = Vec::new();
        if low >= high {
            return rects;
        }
        for (idx, row) in self.rows.iter().enumerate() {
            if row.start >= high || row.end < low {
                continue;
            }
            let start = low.clamp(row.start, row.end);
            let end = high.clamp(row.start, row.end);
            if start == end && row.start != row.end {
                continue;
            }
            let x = self.typeface.measure(&self.text[row.start..start]);
            let right = self.typeface.measure(&self.text[row.start..end]);
            rects.push(Rect::new(
                x,
                idx as f32 * self.line_height,
                right - x,
                self.line_height,
            ));
        }
        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::typeface::MonospaceTypeface;

    fn face() -> MonospaceTypeface {
        MonospaceTypeface::default()
    }

    fn ranges(rows: &[VisualRow]) -> Vec<Range<usize>> {
        rows.iter().map(VisualRow::range).collect()
    }

    #[test]
    fn test_rows_without_wrap() {
        let face = face();
        let rows = layout_rows("Line one\nLine two\n\nLine four", &face, WrapMode::Word, None);
        assert_eq!(ranges(&rows), vec![0..8, 9..17, 18..18, 19..28]);
        assert!(rows.iter().all(|row| row.hard));
        assert!((rows[2].width - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_greedy_word_wrap() {
        let face = face();
        let rows = layout_rows("The quick brown fox", &face, WrapMode::Word, Some(10.0));
        assert_eq!(ranges(&rows), vec![0..10, 10..19]);
        assert!(rows[0].is_soft_wrapped());
        assert!(rows[1].hard);
        // Hanging whitespace is measured but does not force a break.
        assert!((rows[0].width - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_long_word_is_not_broken() {
        let face = face();
        let rows = layout_rows("a incomprehensibilities b", &face, WrapMode::Word, Some(5.0));
        assert_eq!(ranges(&rows), vec![0..2, 2..24, 24..25]);
    }

    #[test]
    fn test_wrap_mode_none_ignores_width() {
        let face = face();
        let rows = layout_rows("The quick brown fox", &face, WrapMode::None, Some(5.0));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_caret_position_prefers_line() {
        let face = face();
        let layout = TextLayout::new("The quick brown fox", &face, WrapMode::Word, Some(10.0));
        assert_eq!(layout.caret_position(10, false), Point::new(10.0, 1.0));
        assert_eq!(layout.caret_position(10, true), Point::new(0.0, 2.0));
        assert_eq!(layout.caret_position(12, false), Point::new(2.0, 2.0));
        assert_eq!(layout.caret_position(0, true), Point::new(0.0, 1.0));
        assert_eq!(layout.caret_position(19, true), Point::new(9.0, 2.0));
    }

    #[test]
    fn test_explicit_break_ignores_preference() {
        let face = face();
        let layout = TextLayout::new("ab\ncd", &face, WrapMode::Word, Some(10.0));
        assert_eq!(layout.caret_position(2, true), Point::new(2.0, 1.0));
        assert_eq!(layout.caret_position(3, false), Point::new(0.0, 2.0));
    }

    #[test]
    fn test_caret_inside_crlf_stays_on_row() {
        let face = face();
        let layout = TextLayout::new("ab\r\ncd", &face, WrapMode::None, None);
        assert_eq!(layout.row_for_offset(3, false), 0);
        assert_eq!(layout.caret_position(3, false), Point::new(2.0, 1.0));
        assert_eq!(layout.row_for_offset(4, false), 1);
    }

    #[test]
    fn test_nearest_offset_second_wrapped_row() {
        let face = face();
        let layout = TextLayout::new("The quick brown fox", &face, WrapMode::Word, Some(10.0));
        assert_eq!(layout.nearest_offset(Point::new(0.0, 1.5)), 10);
        assert_eq!(layout.nearest_offset(Point::new(0.2, 2.0)), 10);
    }

    #[test]
    fn test_nearest_offset_midpoints() {
        let face = MonospaceTypeface::new(10.0, 20.0);
        let layout = TextLayout::new("hello", &face, WrapMode::None, None);
        assert_eq!(layout.nearest_offset(Point::new(-5.0, 10.0)), 0);
        assert_eq!(layout.nearest_offset(Point::new(4.0, 10.0)), 0);
        assert_eq!(layout.nearest_offset(Point::new(5.0, 10.0)), 1);
        assert_eq!(layout.nearest_offset(Point::new(19.0, 10.0)), 2);
        assert_eq!(layout.nearest_offset(Point::new(999.0, 10.0)), 5);
    }

    #[test]
    fn test_hit_test_keeps_caret_on_hit_row() {
        let face = face();
        let layout = TextLayout::new("The quick brown fox", &face, WrapMode::Word, Some(10.0));
        let head = layout.hit_test(Point::new(0.0, 1.5));
        assert_eq!(head.offset, 10);
        assert_eq!(head.row, 1);
        assert!(head.prefer_next_line);
        assert_eq!(
            layout.caret_position(head.offset, head.prefer_next_line),
            Point::new(0.0, 2.0)
        );

        let tail = layout.hit_test(Point::new(50.0, 0.5));
        assert_eq!(tail.offset, 10);
        assert_eq!(tail.row, 0);
        assert!(!tail.prefer_next_line);
    }

    #[test]
    fn test_nearest_row_ties_prefer_earlier_row() {
        let face = face();
        let layout = TextLayout::new("a\nb\nc", &face, WrapMode::None, None);
        assert_eq!(layout.nearest_row(1.0), 0);
        assert_eq!(layout.nearest_row(1.01), 1);
        assert_eq!(layout.nearest_row(-40.0), 0);
        assert_eq!(layout.nearest_row(40.0), 2);
    }

    #[test]
    fn test_round_trip_with_fractional_line_heights() {
        let text = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj\nk\nl\nm\nn\no\np\nq\nr\ns\nt";
        for line_height in [17.3, 16.6, 13.7, 1.1, 0.3, 23.45] {
            let face = MonospaceTypeface::new(1.0, line_height);
            let layout = TextLayout::new(text, &face, WrapMode::None, None);
            for offset in 0..=text.len() {
                let position = layout.caret_position(offset, false);
                let back = layout.nearest_offset(position);
                assert_eq!(
                    layout.caret_position(back, false),
                    position,
                    "offset {offset} at line height {line_height}"
                );
                assert_eq!(back, offset, "offset {offset} at line height {line_height}");
            }
        }
    }

    #[test]
    fn test_nearest_offset_multibyte() {
        let face = face();
        let text = "añb\n漢字x";
        let layout = TextLayout::new(text, &face, WrapMode::None, None);
        assert_eq!(layout.nearest_offset(Point::new(1.6, 0.5)), 3);
        // Each CJK character is two cells wide.
        assert_eq!(layout.nearest_offset(Point::new(2.9, 1.5)), 8);
        assert_eq!(layout.nearest_offset(Point::new(3.1, 1.5)), 11);
    }

    #[test]
    fn test_round_trip_all_offsets() {
        let face = face();
        let text = "Lorem ipsum dolor sit amet,\nconsectetur adipiscing\n\nelit";
        let layout = TextLayout::new(text, &face, WrapMode::Word, Some(12.0));
        for offset in 0..=text.len() {
            if !text.is_char_boundary(offset) {
                continue;
            }
            let position = layout.caret_position(offset, false);
            let back = layout.nearest_offset(position);
            assert_eq!(layout.caret_position(back, false), position, "offset {offset}");
        }
    }

    #[test]
    fn test_size_and_measure_slice() {
        let face = face();
        let text = "The quick brown fox";
        let layout = TextLayout::new(text, &face, WrapMode::Word, Some(10.0));
        assert_eq!(layout.size(), Size::new(10.0, 2.0));
        assert_eq!(
            layout.measure_slice(0..9, WrapMode::Word, Some(10.0)),
            Size::new(9.0, 1.0)
        );
        assert_eq!(layout.measure_slice(4..100, WrapMode::None, None), Size::new(15.0, 1.0));
    }

    #[test]
    fn test_selection_rects() {
        let face = face();
        let layout = TextLayout::new("The quick brown fox", &face, WrapMode::Word, Some(10.0));
        let rects = layout.selection_rects(4, 13);
        assert_eq!(
            rects,
            vec![Rect::new(4.0, 0.0, 6.0, 1.0), Rect::new(0.0, 1.0, 3.0, 1.0)]
        );
        assert!(layout.selection_rects(5, 5).is_empty());
    }

    #[test]
    fn test_selection_rects_cover_blank_lines() {
        let face = face();
        let layout = TextLayout::new("ab\n\ncd", &face, WrapMode::None, None);
        let rects = layout.selection_rects(1, 5);
        assert_eq!(rects.len(), 3);
        assert!((rects[1].width - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_layout_cache_rebuilds_on_key_change() {
        let face = face();
        let mut cache = LayoutCache::new();
        let key = LayoutKey {
            revision: 1,
            width: Some(10.0),
            wrap: WrapMode::Word,
            typeface_revision: 0,
        };
        assert_eq!(cache.rows_for(key, "The quick brown fox", &face).len(), 2);
        assert!(cache.is_valid_for(&key));

        let wider = LayoutKey {
            width: Some(100.0),
            ..key
        };
        assert!(!cache.is_valid_for(&wider));
        assert_eq!(cache.rows_for(wider, "The quick brown fox", &face).len(), 1);
        assert!(cache.is_valid_for(&wider));
        assert!(!cache.is_valid_for(&key));
    }
}
