//! Editable text storage with an append-optimized edit buffer.
//!
//! [`TextStore`] owns the live text of one editor. Consecutive insertions at
//! the same moving insertion point (the common "user is typing" case) are
//! batched into an [`EditBuffer`]: a region of reserved capacity anchored at
//! the point where the run of insertions started. Any edit that is not
//! adjacent to the buffer's tail, or that bypasses it (range replacement,
//! whole-value assignment), discards the buffer.
//!
//! The store never adjusts caret offsets. Callers own their offsets and
//! must recompute them after every mutation.

use crate::error::Result;
use crate::text::boundary::{is_line_break, normalize_line_breaks};
use crate::text::value::{TextValue, checked_range};
use crate::unicode::floor_char_boundary;
use std::borrow::Cow;
use std::ops::Range;

/// Minimum capacity reserved whenever the edit buffer is re-anchored.
const MIN_EDIT_CAPACITY: usize = 64;

/// Scratch region batching consecutive insertions.
///
/// Invariant: `len <= capacity`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditBuffer {
    start: usize,
    len: usize,
    capacity: usize,
}

impl EditBuffer {
    fn anchored(start: usize, capacity: usize) -> Self {
        Self {
            start,
            len: 0,
            capacity,
        }
    }

    /// Byte offset where the batched run of insertions began.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Bytes inserted through this buffer so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been inserted through this buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes the buffer can absorb before it must be re-anchored.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Offset just past the last batched insertion.
    #[must_use]
    pub fn tail(&self) -> usize {
        self.start + self.len
    }

    /// Whether an insertion at `offset` continues the current run.
    #[must_use]
    pub fn is_at_tail(&self, offset: usize) -> bool {
        self.capacity > 0 && offset == self.tail()
    }

    fn remaining(&self) -> usize {
        self.capacity - self.len
    }
}

/// Owned, mutable text value of one editor.
#[derive(Debug, Default)]
pub struct TextStore {
    text: String,
    edit: EditBuffer,
    single_line: bool,
    revision: u64,
    dirty: bool,
}

impl TextStore {
    /// Create an empty multi-line store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a multi-line store holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut store = Self::new();
        store.set(text);
        store
    }

    /// Whether line breaks are replaced by spaces on the way in.
    #[must_use]
    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    /// Switch single-line mode. Enabling it normalizes the current text.
    pub fn set_single_line(&mut self, single_line: bool) {
        self.single_line = single_line;
        if single_line && self.text.chars().any(is_line_break) {
            let text = normalize_line_breaks(&self.text).into_owned();
            self.set(&text);
        }
    }

    /// Borrow the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the current text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take an immutable snapshot of the current text.
    #[must_use]
    pub fn snapshot(&self) -> TextValue {
        TextValue::from(self.text.as_str())
    }

    /// Current edit buffer.
    #[must_use]
    pub fn edit_buffer(&self) -> EditBuffer {
        self.edit
    }

    /// Monotonic counter bumped by every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the text changed since the dirty flag was last taken.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Replace the whole value.
    ///
    /// In single-line mode every line break sequence becomes one space, so
    /// the stored length may differ from `text.len()`.
    pub fn set(&mut self, text: &str) {
        let text = self.normalize(text);
        self.text.clear();
        self.text.push_str(&text);
        self.edit = EditBuffer::default();
        self.mark_dirty();
    }

    /// Replace `range` with `with` and return the new value.
    ///
    /// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) if the range
    /// exceeds the current text. Range ends inside a code point are snapped
    /// back to its start.
    pub fn replace(&mut self, range: Range<usize>, with: &str) -> Result<TextValue> {
        let range = checked_range(&self.text, range)?;
        let with = self.normalize(with);
        if !range.is_empty() || !with.is_empty() {
            self.text.replace_range(range, &with);
            self.edit = EditBuffer::default();
            self.mark_dirty();
        }
        Ok(self.snapshot())
    }

    /// Insert `text` at `at`, batching into the edit buffer when `at` is the
    /// buffer's tail and the buffer has room.
    ///
    /// Returns the offset just past the inserted text.
    pub fn push(&mut self, at: usize, text: &str) -> usize {
        let at = floor_char_boundary(&self.text, at);
        let text = self.normalize(text);
        if text.is_empty() {
            return at;
        }
        if !self.edit.is_at_tail(at) || self.edit.remaining() < text.len() {
            self.edit = EditBuffer::anchored(at, text.len().max(MIN_EDIT_CAPACITY));
            self.text.reserve(self.edit.capacity);
        }
        self.text.insert_str(at, &text);
        self.edit.len += text.len();
        self.mark_dirty();
        at + text.len()
    }

    /// Empty the store.
    ///
    /// The old backing allocation is zeroed before it is released, so cleared
    /// text cannot resurface through later growth of the store. Snapshots
    /// taken earlier are separate allocations and stay intact.
    pub fn clear(&mut self) {
        let mut old = std::mem::take(&mut self.text).into_bytes();
        old.fill(0);
        drop(old);
        self.edit = EditBuffer::default();
        self.mark_dirty();
    }

    fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.single_line {
            normalize_line_breaks(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    fn mark_dirty(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.dirty = true;
    }
}
