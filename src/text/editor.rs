//! Editable text widget core.
//!
//! [`TextEditor`] owns the text store, caret model, layout cache and click
//! history of one editor and wires them together. Every offset it is handed
//! is clamped into the text; no editor operation fails on bad input.
//!
//! Coordinates passed to the pointer methods ([`TextEditor::press`],
//! [`TextEditor::drag`]) are host coordinates, the same space as
//! [`TextEditor::set_bounds`]. Positions reported back (caret position,
//! selection rectangles) are content coordinates, relative to the top left
//! of the unscrolled text.

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::event::{LogLevel, emit_log};
use crate::geometry::{Point, Rect, Size};
use crate::input::{
    ActionTable, ClickOptions, ClickState, EditorAction, Granularity, KeyBindings, KeyEvent,
};
use crate::text::boundary::{line_range_at, word_back, word_front, word_range_at};
use crate::text::caret::CaretState;
use crate::text::layout::{Hit, LayoutCache, LayoutKey, TextLayout, WrapMode};
use crate::text::store::{EditBuffer, TextStore};
use crate::text::typeface::{MonospaceTypeface, Typeface};
use crate::text::value::TextValue;
use crate::unicode::{floor_char_boundary, next_grapheme_boundary, prev_grapheme_boundary};
use crate::widget::{CaretOwner, Focusable, Hoverable};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::time::Duration;

/// Editor configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOptions {
    /// Replace line breaks with spaces and turn Enter into submit.
    pub single_line: bool,
    pub wrap: WrapMode,
    /// Tab stop distance of the default monospace typeface, in cells.
    pub tab_width: u8,
    pub click: ClickOptions,
    /// Fraction of the viewport height (0.0-0.5) kept between the caret and
    /// the viewport edge when scrolling.
    pub scroll_margin: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            single_line: false,
            wrap: WrapMode::Word,
            tab_width: 4,
            click: ClickOptions::default(),
            scroll_margin: 0.1,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u8) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn with_click(mut self, click: ClickOptions) -> Self {
        self.click = click;
        self
    }

    /// Set the scroll margin, clamped to `0.0..=0.5`.
    #[must_use]
    pub fn with_scroll_margin(mut self, margin: f32) -> Self {
        self.scroll_margin = margin.clamp(0.0, 0.5);
        self
    }
}

type Notify = Box<dyn FnMut(&mut TextEditor)>;

/// Single- or multi-line plain text editor.
pub struct TextEditor {
    store: TextStore,
    caret: CaretState,
    clicks: ClickState,
    layout: LayoutCache,
    typeface: Box<dyn Typeface>,
    typeface_revision: u64,
    options: EditorOptions,
    bounds: Rect,
    scroll: f32,
    follow_caret: bool,
    focused: bool,
    clipboard: Box<dyn Clipboard>,
    on_changed: Option<Notify>,
    on_submitted: Option<Notify>,
    actions: ActionTable,
    bindings: KeyBindings,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// Create an empty multi-line editor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Create an empty editor.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        let mut store = TextStore::new();
        store.set_single_line(options.single_line);
        let typeface = MonospaceTypeface::default().with_tab_width(options.tab_width);
        Self {
            store,
            caret: CaretState::new(),
            clicks: ClickState::new(),
            layout: LayoutCache::new(),
            typeface: Box::new(typeface),
            typeface_revision: 0,
            options,
            bounds: Rect::default(),
            scroll: 0.0,
            follow_caret: false,
            focused: false,
            clipboard: Box::new(MemoryClipboard::new()),
            on_changed: None,
            on_submitted: None,
            actions: ActionTable::standard(),
            bindings: KeyBindings::standard(),
        }
    }

    /// Create a multi-line editor holding `text`, caret at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.set_value(text);
        editor
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Switch single-line mode. Enabling it folds existing line breaks.
    pub fn set_single_line(&mut self, single_line: bool) {
        self.options.single_line = single_line;
        self.store.set_single_line(single_line);
        self.caret.clamp_to(self.store.text());
        self.follow_caret = true;
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.options.wrap = wrap;
        self.follow_caret = true;
    }

    /// Replace the typeface. Cached layout and caret positions are dropped.
    pub fn set_typeface(&mut self, typeface: impl Typeface + 'static) {
        self.typeface = Box::new(typeface);
        self.typeface_revision = self.typeface_revision.wrapping_add(1);
        self.caret.invalidate_position();
        self.follow_caret = true;
    }

    /// Replace the clipboard backend.
    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Box::new(clipboard);
    }

    /// Set the editor bounds in host coordinates. The width is the
    /// available wrap width; zero disables wrapping.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.follow_caret = true;
    }

    /// Resize the editor, keeping its origin.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_bounds(Rect::new(self.bounds.x, self.bounds.y, width, height));
    }

    /// Action handlers used by [`Self::dispatch`].
    pub fn actions_mut(&mut self) -> &mut ActionTable {
        &mut self.actions
    }

    /// Key bindings used by [`Self::handle_key`].
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Register a callback run after every committed edit.
    ///
    /// The callback gets the editor itself and may edit it further. Edits
    /// made from inside the callback do not notify again.
    pub fn on_changed(&mut self, callback: impl FnMut(&mut TextEditor) + 'static) {
        self.on_changed = Some(Box::new(callback));
    }

    /// Register a callback run on submit.
    pub fn on_submitted(&mut self, callback: impl FnMut(&mut TextEditor) + 'static) {
        self.on_submitted = Some(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Value
    // ------------------------------------------------------------------

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        self.store.text()
    }

    /// Immutable copy of the current text.
    #[must_use]
    pub fn snapshot(&self) -> TextValue {
        self.store.snapshot()
    }

    /// Replace the whole value. The caret and anchor are clamped into the
    /// new text; change listeners are not notified.
    pub fn set_value(&mut self, text: &str) {
        self.store.set(text);
        self.caret.set_extending(false);
        self.caret.clamp_to(self.store.text());
        self.follow_caret = true;
        emit_log(
            LogLevel::Debug,
            &format!("editor value replaced ({} bytes)", self.store.len()),
        );
    }

    /// Empty the editor, scrubbing the old text from memory.
    pub fn clear(&mut self) {
        self.store.clear();
        self.caret.set_extending(false);
        self.caret.move_to("", 0);
        self.caret.set_horizontal_anchor(0.0);
        self.clicks.reset();
        self.scroll = 0.0;
        emit_log(LogLevel::Debug, "editor value cleared");
    }

    /// Currently selected text (empty when nothing is selected).
    #[must_use]
    pub fn selected_text(&self) -> &str {
        &self.store.text()[self.caret.selection()]
    }

    /// Insertion state of the store, for hosts that want to observe typing runs.
    #[must_use]
    pub fn edit_buffer(&self) -> EditBuffer {
        self.store.edit_buffer()
    }

    // ------------------------------------------------------------------
    // Caret queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret.caret()
    }

    #[must_use]
    pub fn anchor(&self) -> usize {
        self.caret.anchor()
    }

    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.caret.selection()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.caret.has_selection()
    }

    /// Whether a selection exists or a drag is in progress.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.caret.is_selecting()
    }

    /// Remembered x coordinate used by vertical navigation.
    #[must_use]
    pub fn horizontal_anchor(&self) -> f32 {
        self.caret.horizontal_anchor()
    }

    #[must_use]
    pub fn prefers_next_line(&self) -> bool {
        self.caret.prefers_next_line()
    }

    /// Click count of the last press (0 single, 1 double, 2 triple).
    #[must_use]
    pub fn click_count(&self) -> u8 {
        self.clicks.count()
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Type `text` at the caret, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        if self.caret.has_selection() {
            self.replace_selection(text);
            return;
        }
        let revision = self.store.revision();
        let caret = self.store.push(self.caret.caret(), text);
        if self.store.revision() == revision {
            return;
        }
        self.caret.set_extending(false);
        self.caret.move_to(self.store.text(), caret);
        self.edited();
    }

    /// Replace the selection (possibly empty) with `text`.
    pub fn replace_selection(&mut self, text: &str) {
        let revision = self.store.revision();
        self.caret.set_extending(false);
        if let Err(err) = self.caret.replace_selection(&mut self.store, text) {
            emit_log(LogLevel::Error, &format!("selection replace failed: {err}"));
            return;
        }
        if self.store.revision() != revision {
            self.edited();
        }
    }

    /// Delete the selection, or the grapheme before the caret.
    pub fn chop(&mut self) {
        let caret = self.caret.caret();
        let start = prev_grapheme_boundary(self.store.text(), caret);
        self.delete_range(start..caret);
    }

    /// Delete the selection, or the word before the caret.
    pub fn chop_word(&mut self) {
        let caret = self.caret.caret();
        let start = caret - word_back(&self.store.text()[..caret], false).len();
        self.delete_range(start..caret);
    }

    /// Delete the selection, or the grapheme after the caret.
    pub fn delete_forward(&mut self) {
        let caret = self.caret.caret();
        let end = next_grapheme_boundary(self.store.text(), caret);
        self.delete_range(caret..end);
    }

    /// Delete the selection, or the word after the caret.
    pub fn delete_word_forward(&mut self) {
        let caret = self.caret.caret();
        let end = caret + word_front(&self.store.text()[caret..], false).len();
        self.delete_range(caret..end);
    }

    /// Insert a line break, or submit in single-line mode.
    pub fn break_line(&mut self) {
        if self.options.single_line {
            self.submit();
        } else {
            self.insert("\n");
        }
    }

    /// Notify the submit listener with the current value.
    pub fn submit(&mut self) {
        emit_log(LogLevel::Debug, "editor submitted");
        if let Some(mut callback) = self.on_submitted.take() {
            callback(self);
            // Keep a replacement registered from inside the callback.
            if self.on_submitted.is_none() {
                self.on_submitted = Some(callback);
            }
        }
    }

    fn delete_range(&mut self, range: Range<usize>) {
        if !self.caret.has_selection() {
            self.caret.set_selection(self.store.text(), range.start, range.end);
        }
        self.replace_selection("");
    }

    fn edited(&mut self) {
        self.caret.set_prefer_next_line(false);
        self.follow_caret = true;
        self.refresh_horizontal_anchor();
        if let Some(mut callback) = self.on_changed.take() {
            callback(self);
            if self.on_changed.is_none() {
                self.on_changed = Some(callback);
            }
        }
    }

    // ------------------------------------------------------------------
    // Caret movement
    // ------------------------------------------------------------------

    pub fn caret_left(&mut self) {
        self.step_left(false);
    }

    pub fn select_left(&mut self) {
        self.step_left(true);
    }

    pub fn caret_right(&mut self) {
        self.step_right(false);
    }

    pub fn select_right(&mut self) {
        self.step_right(true);
    }

    pub fn word_left(&mut self) {
        self.step_word_left(false);
    }

    pub fn select_word_left(&mut self) {
        self.step_word_left(true);
    }

    pub fn word_right(&mut self) {
        self.step_word_right(false);
    }

    pub fn select_word_right(&mut self) {
        self.step_word_right(true);
    }

    /// Move to the start of the caret's visual row.
    pub fn line_start(&mut self) {
        let row = self.current_row();
        self.place_horizontal(row.start, false, true);
    }

    pub fn select_to_line_start(&mut self) {
        let row = self.current_row();
        self.place_horizontal(row.start, true, true);
    }

    /// Move to the end of the caret's visual row. On a soft-wrapped row the
    /// caret stays at the row's tail.
    pub fn line_end(&mut self) {
        let row = self.current_row();
        self.place_horizontal(row.end, false, false);
    }

    pub fn select_to_line_end(&mut self) {
        let row = self.current_row();
        self.place_horizontal(row.end, true, false);
    }

    pub fn text_start(&mut self) {
        self.place_horizontal(0, false, false);
    }

    pub fn select_to_text_start(&mut self) {
        self.place_horizontal(0, true, false);
    }

    pub fn text_end(&mut self) {
        let end = self.store.len();
        self.place_horizontal(end, false, false);
    }

    pub fn select_to_text_end(&mut self) {
        let end = self.store.len();
        self.place_horizontal(end, true, false);
    }

    /// Move one visual row up, keeping the horizontal anchor. On the top row
    /// the caret goes to the start of the text.
    pub fn caret_up(&mut self) {
        self.step_vertical(false, false);
    }

    pub fn select_up(&mut self) {
        self.step_vertical(false, true);
    }

    /// Move one visual row down, keeping the horizontal anchor. On the last
    /// row the caret goes to the end of the text.
    pub fn caret_down(&mut self) {
        self.step_vertical(true, false);
    }

    pub fn select_down(&mut self) {
        self.step_vertical(true, true);
    }

    pub fn select_all(&mut self) {
        let end = self.store.len();
        self.set_selection(0, end);
    }

    /// Drop the selection, leaving the caret where it is.
    pub fn collapse_selection(&mut self) {
        self.caret.collapse();
    }

    /// Place the caret at `offset`, dropping the selection.
    pub fn move_to(&mut self, offset: usize) {
        self.place_horizontal(offset, false, false);
    }

    /// Move the caret to `offset`, keeping the selection anchor.
    pub fn extend_to(&mut self, offset: usize) {
        self.place_horizontal(offset, true, false);
    }

    /// Select `low..high` with the caret at `high`.
    pub fn set_selection(&mut self, low: usize, high: usize) {
        self.caret.set_extending(false);
        self.caret.set_selection(self.store.text(), low, high);
        self.caret.set_prefer_next_line(false);
        self.follow_caret = true;
        self.refresh_horizontal_anchor();
    }

    /// Select the word touching `offset`.
    pub fn select_word_at(&mut self, offset: usize) {
        let offset = floor_char_boundary(self.store.text(), offset);
        let range = word_range_at(self.store.text(), offset);
        self.set_selection(range.start, range.end);
    }

    /// Select the logical line enclosing `offset`, line break excluded.
    pub fn select_line_at(&mut self, offset: usize) {
        let offset = floor_char_boundary(self.store.text(), offset);
        let range = line_range_at(self.store.text(), offset);
        self.set_selection(range.start, range.end);
    }

    fn step_left(&mut self, extend: bool) {
        let target = if self.caret.has_selection() && !extend {
            self.caret.selection_low()
        } else {
            prev_grapheme_boundary(self.store.text(), self.caret.caret())
        };
        self.place_horizontal(target, extend, true);
    }

    fn step_right(&mut self, extend: bool) {
        let target = if self.caret.has_selection() && !extend {
            self.caret.selection_high()
        } else {
            next_grapheme_boundary(self.store.text(), self.caret.caret())
        };
        self.place_horizontal(target, extend, true);
    }

    fn step_word_left(&mut self, extend: bool) {
        let caret = self.caret.caret();
        let target = caret - word_back(&self.store.text()[..caret], false).len();
        self.place_horizontal(target, extend, true);
    }

    fn step_word_right(&mut self, extend: bool) {
        let caret = self.caret.caret();
        let target = caret + word_front(&self.store.text()[caret..], false).len();
        self.place_horizontal(target, extend, true);
    }

    fn step_vertical(&mut self, down: bool, extend: bool) {
        let x = self.caret.horizontal_anchor();
        let position = self.caret_position();
        let (offset, prefer) = (self.caret.caret(), self.caret.prefers_next_line());
        let len = self.store.len();

        let layout = self.layout();
        let row = layout.row_for_offset(offset, prefer);
        let line_height = layout.line_height();
        let target = if down {
            if row + 1 >= layout.row_count() {
                len
            } else {
                layout.nearest_offset(Point::new(x, position.y + 0.5 * line_height))
            }
        } else if row == 0 {
            0
        } else {
            layout.nearest_offset(Point::new(x, position.y - 1.5 * line_height))
        };

        self.place(target, extend, true);
    }

    fn current_row(&mut self) -> Range<usize> {
        let (offset, prefer) = (self.caret.caret(), self.caret.prefers_next_line());
        let layout = self.layout();
        let idx = layout.row_for_offset(offset, prefer);
        layout.rows().get(idx).map_or(0..0, |row| row.range())
    }

    fn place(&mut self, offset: usize, extend: bool, prefer_next_line: bool) {
        if extend {
            self.caret.extend_to(self.store.text(), offset);
        } else {
            self.caret.move_to(self.store.text(), offset);
        }
        self.caret.set_prefer_next_line(prefer_next_line);
        self.follow_caret = true;
    }

    fn place_horizontal(&mut self, offset: usize, extend: bool, prefer_next_line: bool) {
        self.place(offset, extend, prefer_next_line);
        self.refresh_horizontal_anchor();
    }

    fn refresh_horizontal_anchor(&mut self) {
        let x = self.caret_position().x;
        self.caret.set_horizontal_anchor(x);
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Handle a pointer press at `point` (host coordinates).
    ///
    /// A single click places the caret and starts a drag selection; with
    /// `extend` set it moves the caret and keeps the anchor. Double and
    /// triple clicks select the word or line under the pointer.
    pub fn press(&mut self, point: Point, timestamp: Duration, extend: bool) {
        let granularity = self.clicks.press(timestamp, point, &self.options.click);
        let hit = self.hit(point);
        self.caret.set_extending(false);
        match granularity {
            Granularity::Character => {
                self.place(hit.offset, extend, hit.prefer_next_line);
                self.caret.set_extending(true);
                self.refresh_horizontal_anchor();
            }
            Granularity::Word => self.select_word_at(hit.offset),
            Granularity::Line => self.select_line_at(hit.offset),
        }
    }

    /// Extend the selection to `point` while a press is held.
    pub fn drag(&mut self, point: Point) {
        if !self.caret.is_extending() {
            return;
        }
        let hit = self.hit(point);
        self.place_horizontal(hit.offset, true, hit.prefer_next_line);
    }

    /// End the press started by [`Self::press`].
    pub fn release(&mut self) {
        self.caret.set_extending(false);
    }

    fn hit(&mut self, point: Point) -> Hit {
        let local = Point::new(
            point.x - self.bounds.x,
            point.y - self.bounds.y + self.scroll,
        );
        self.layout().hit_test(local)
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    /// Copy the selection to the clipboard. Does nothing without a selection.
    pub fn copy(&mut self) {
        if !self.caret.has_selection() {
            return;
        }
        let range = self.caret.selection();
        self.clipboard.write(&self.store.text()[range]);
    }

    /// Copy the selection to the clipboard and delete it.
    pub fn cut(&mut self) {
        if !self.caret.has_selection() {
            return;
        }
        self.copy();
        self.replace_selection("");
    }

    /// Insert the clipboard text at the caret, replacing the selection.
    pub fn paste(&mut self) {
        if let Some(text) = self.clipboard.read() {
            self.insert(&text);
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Run the handler bound to `action`. Returns `false` if none is bound.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        let Some(handler) = self.actions.handler(action) else {
            return false;
        };
        handler(self);
        true
    }

    /// Handle a key press: bound keys run their action, unbound printable
    /// characters are typed. Returns whether the key was consumed.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if let Some(action) = self.bindings.resolve(&event) {
            return self.dispatch(action);
        }
        if let Some(c) = event.typed_char() {
            let mut buf = [0u8; 4];
            self.insert(c.encode_utf8(&mut buf));
            return true;
        }
        false
    }

    // ------------------------------------------------------------------
    // Visual queries
    // ------------------------------------------------------------------

    /// Caret position in content coordinates (`y` is the bottom of its row).
    ///
    /// Recomputed only when the text, layout or caret changed since the last
    /// call.
    pub fn caret_position(&mut self) -> Point {
        let key = self.layout_key();
        if let Some(position) = self.caret.cached_position(&key) {
            return position;
        }
        let (offset, prefer) = (self.caret.caret(), self.caret.prefers_next_line());
        let position = self.layout().caret_position(offset, prefer);
        self.caret.cache_position(key, position);
        position
    }

    /// Vertical scroll offset that keeps the caret inside the viewport.
    pub fn scroll(&mut self) -> f32 {
        if std::mem::take(&mut self.follow_caret) {
            self.scroll_to_caret();
        }
        self.scroll
    }

    /// Scroll to `y` without following the caret.
    pub fn set_scroll(&mut self, y: f32) {
        self.scroll = y.max(0.0);
        self.follow_caret = false;
    }

    /// Rectangles covering the selection, one per visual row.
    pub fn selection_rects(&mut self) -> Vec<Rect> {
        let selection = self.caret.selection();
        self.layout().selection_rects(selection.start, selection.end)
    }

    /// Visual size of the whole text.
    pub fn content_size(&mut self) -> Size {
        self.layout().size()
    }

    /// Visual size of a slice of the text, laid out at the current width.
    pub fn measure_slice(&mut self, range: Range<usize>) -> Size {
        let (wrap, width) = (self.wrap_mode(), self.wrap_width());
        self.layout().measure_slice(range, wrap, width)
    }

    /// Current layout, rebuilt if the text, width or typeface changed.
    pub fn layout(&mut self) -> TextLayout<'_> {
        if self.store.take_dirty() {
            self.caret.invalidate_position();
        }
        let key = self.layout_key();
        let rows = self.layout.rows_for(key, self.store.text(), &*self.typeface);
        TextLayout::from_rows(self.store.text(), &*self.typeface, Cow::Borrowed(rows))
    }

    fn scroll_to_caret(&mut self) {
        let viewport = self.bounds.height;
        if viewport <= 0.0 {
            return;
        }
        let caret = self.caret_position();
        let line_height = self.typeface.line_height();
        let margin = viewport * self.options.scroll_margin;
        let top = caret.y - line_height;
        if top - margin < self.scroll {
            self.scroll = top - margin;
        } else if caret.y + margin > self.scroll + viewport {
            self.scroll = caret.y + margin - viewport;
        }
        let max = (self.content_size().height - viewport).max(0.0);
        self.scroll = self.scroll.clamp(0.0, max);
    }

    fn wrap_mode(&self) -> WrapMode {
        if self.options.single_line {
            WrapMode::None
        } else {
            self.options.wrap
        }
    }

    fn wrap_width(&self) -> Option<f32> {
        (self.bounds.width > 0.0).then_some(self.bounds.width)
    }

    fn layout_key(&self) -> LayoutKey {
        LayoutKey {
            revision: self.store.revision(),
            width: self.wrap_width(),
            wrap: self.wrap_mode(),
            typeface_revision: self.typeface_revision,
        }
    }
}

impl fmt::Debug for TextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEditor")
            .field("value", &self.store.text())
            .field("caret", &self.caret)
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl CaretOwner for TextEditor {
    fn caret_offset(&self) -> usize {
        self.caret.caret()
    }

    fn caret_point(&mut self) -> Point {
        self.caret_position()
    }
}

impl Hoverable for TextEditor {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Focusable for TextEditor {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
        self.caret.set_extending(false);
        self.clicks.reset();
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
