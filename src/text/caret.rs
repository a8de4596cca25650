//! Caret and selection state.
//!
//! The model is a pair of byte offsets into one text: the caret, which moves,
//! and the selection anchor, which stays put while a selection is extended.
//! All requested offsets are clamped into the text and snapped back onto a
//! code point boundary; nothing here fails on a bad offset.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::geometry::Point;
use crate::text::layout::LayoutKey;
use crate::text::store::TextStore;
use crate::text::value::TextValue;
use crate::unicode::floor_char_boundary;
use std::ops::Range;

/// Cached visual caret position and the layout it was computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
struct VisualCaret {
    key: LayoutKey,
    position: Point,
}

/// Caret, selection anchor and navigation column of one editor.
#[derive(Clone, Debug, Default)]
pub struct CaretState {
    caret: usize,
    anchor: usize,
    horizontal_anchor: f32,
    extending: bool,
    prefer_next_line: bool,
    visual: Option<VisualCaret>,
}

impl CaretState {
    /// Create a caret at offset 0 with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caret byte offset.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Selection anchor byte offset. Equals the caret when nothing is selected.
    #[must_use]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Remembered x coordinate for vertical navigation.
    #[must_use]
    pub fn horizontal_anchor(&self) -> f32 {
        self.horizontal_anchor
    }

    /// Set the remembered x coordinate.
    pub fn set_horizontal_anchor(&mut self, x: f32) {
        self.horizontal_anchor = x;
    }

    /// Whether the caret renders at the head of the next row when it sits on
    /// an implicit wrap point.
    #[must_use]
    pub fn prefers_next_line(&self) -> bool {
        self.prefer_next_line
    }

    /// Set the wrap point preference for the current caret offset.
    pub fn set_prefer_next_line(&mut self, prefer: bool) {
        if self.prefer_next_line != prefer {
            self.prefer_next_line = prefer;
            self.visual = None;
        }
    }

    /// Whether a selection-extending gesture (such as a mouse drag) is active.
    #[must_use]
    pub fn is_extending(&self) -> bool {
        self.extending
    }

    /// Start or stop a selection-extending gesture.
    pub fn set_extending(&mut self, extending: bool) {
        self.extending = extending;
    }

    /// Whether a selection exists or is being made.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.anchor != self.caret || self.extending
    }

    /// Whether a non-empty selection exists.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.anchor != self.caret
    }

    /// Lower selection bound.
    #[must_use]
    pub fn selection_low(&self) -> usize {
        self.anchor.min(self.caret)
    }

    /// Upper selection bound.
    #[must_use]
    pub fn selection_high(&self) -> usize {
        self.anchor.max(self.caret)
    }

    /// Selected byte range, `low..high`.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection_low()..self.selection_high()
    }

    /// Move the caret. Collapses the selection unless a selection-extending
    /// gesture is active.
    pub fn move_to(&mut self, text: &str, offset: usize) {
        self.caret = clamp_offset(text, offset);
        if !self.extending {
            self.anchor = self.caret;
        }
        self.visual = None;
    }

    /// Move the caret, leaving the anchor where it is.
    pub fn extend_to(&mut self, text: &str, offset: usize) {
        self.caret = clamp_offset(text, offset);
        self.visual = None;
    }

    /// Select `low..high`, with the caret at `high`.
    pub fn set_selection(&mut self, text: &str, low: usize, high: usize) {
        self.anchor = clamp_offset(text, low);
        self.caret = clamp_offset(text, high);
        self.visual = None;
    }

    /// Drop the selection, keeping the caret where it is.
    pub fn collapse(&mut self) {
        self.anchor = self.caret;
    }

    /// Re-clamp both offsets after the text changed underneath them.
    pub fn clamp_to(&mut self, text: &str) {
        self.caret = floor_char_boundary(text, self.caret);
        self.anchor = floor_char_boundary(text, self.anchor);
        self.visual = None;
    }

    /// Replace the selection with `with` through the store, leaving the caret
    /// after the inserted text and nothing selected.
    ///
    /// Replacing an empty selection with an empty string changes nothing.
    /// Offsets left stale by edits made directly on `store` are clamped first.
    pub fn replace_selection(&mut self, store: &mut TextStore, with: &str) -> Result<TextValue> {
        self.clamp_to(store.text());
        let range = self.selection();
        let kept = store.len() - range.len();
        let value = store.replace(range.clone(), with)?;
        // The store may normalize `with`, so derive the insert length from
        // the new total length.
        self.caret = range.start + (store.len() - kept);
        self.anchor = self.caret;
        self.visual = None;
        Ok(value)
    }

    /// Cached visual position, if still valid for `key`.
    #[must_use]
    pub fn cached_position(&self, key: &LayoutKey) -> Option<Point> {
        self.visual
            .filter(|visual| visual.key == *key)
            .map(|visual| visual.position)
    }

    /// Remember the visual position computed against `key`.
    pub fn cache_position(&mut self, key: LayoutKey, position: Point) {
        self.visual = Some(VisualCaret { key, position });
    }

    /// Forget the cached visual position.
    pub fn invalidate_position(&mut self) {
        self.visual = None;
    }
}

/// Clamp `offset` into `text` and snap it onto a code point boundary.
///
/// Snapping is logged: internal callers only produce valid boundaries, so
/// a snap means an external source handed in a bad offset.
fn clamp_offset(text: &str, offset: usize) -> usize {
    let clamped = floor_char_boundary(text, offset);
    if clamped != offset.min(text.len()) {
        emit_log(
            LogLevel::Warn,
            &format!("caret offset {offset} is inside a character; snapped to {clamped}"),
        );
    }
    clamped
}
