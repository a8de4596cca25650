//! `textcore` - plain text editing core for GUI toolkits
//!
//! Owns everything an editable text field needs below the drawing layer:
//! the text value, caret and selection, wrap-aware layout, word and line
//! navigation, multi-click selection and keyboard command dispatch. Glyph
//! metrics come from a host-supplied [`Typeface`]; drawing, theming and the
//! widget tree stay with the host.
//!
//! ```
//! use textcore::{KeyCode, KeyEvent, TextEditor};
//!
//! let mut editor = TextEditor::new();
//! for c in "Hello".chars() {
//!     editor.handle_key(KeyEvent::char(c));
//! }
//! editor.handle_key(KeyEvent::with_shift(KeyCode::Home));
//! assert_eq!(editor.selected_text(), "Hello");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_precision_loss)] // Row indices become pixel offsets
#![allow(clippy::module_name_repetitions)] // Allow text::TextEditor etc
#![allow(clippy::struct_excessive_bools)] // Editor state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod clipboard;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod text;
pub mod unicode;
pub mod widget;

// Re-export core types at crate root
pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use geometry::{Point, Rect, Size};
pub use widget::{CaretOwner, Focusable, Hoverable};

// Re-export input types
pub use input::{
    ActionTable, ClickOptions, EditorAction, Granularity, KeyBindings, KeyCode, KeyEvent,
    KeyModifiers,
};

// Re-export commonly used types
pub use text::{
    EditorOptions, MonospaceTypeface, TextEditor, TextLayout, TextStore, TextValue, Typeface,
    WrapMode,
};
pub use unicode::WidthMethod;
