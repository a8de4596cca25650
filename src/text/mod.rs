//! Plain text storage, layout and editing.
//!
//! Key types:
//!
//! - [`TextStore`]: the editable value with its insertion batching buffer
//! - [`TextValue`]: cheap immutable snapshot of a value
//! - [`TextLayout`]: wrap-aware mapping between offsets and positions
//! - [`CaretState`]: caret, selection anchor and navigation column
//! - [`TextEditor`]: the widget core composing all of the above
//!
//! # Examples
//!
//! ```
//! use textcore::text::TextEditor;
//!
//! let mut editor = TextEditor::new();
//! editor.insert("Hello World");
//! editor.chop_word();
//! assert_eq!(editor.value(), "Hello ");
//! editor.chop_word();
//! assert_eq!(editor.value(), "");
//! ```

mod boundary;
mod caret;
mod editor;
mod layout;
mod store;
mod typeface;
mod value;

pub use boundary::{
    CharClass, LogicalLine, LogicalLines, is_line_break, line_back, line_front, line_range_at,
    logical_lines, normalize_line_breaks, trailing_break_len, word_back, word_front,
    word_range_at,
};
pub use caret::CaretState;
pub use editor::{EditorOptions, TextEditor};
pub use layout::{Hit, LayoutCache, LayoutKey, TextLayout, VisualRow, WrapMode, layout_rows};
pub use store::{EditBuffer, TextStore};
pub use typeface::{MonospaceTypeface, Typeface};
pub use value::TextValue;
