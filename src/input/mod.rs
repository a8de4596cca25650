//! Input handling for the editor.
//!
//! Pointer presses are classified into single, double and triple clicks by
//! [`ClickState`]. Keyboard events resolve through [`KeyBindings`] into
//! [`EditorAction`]s, which [`ActionTable`] maps onto editor operations.

mod action;
mod gesture;
mod keyboard;

pub use action::{ActionHandler, ActionTable, EditorAction, KeyBindings};
pub use gesture::{ClickOptions, ClickState, Granularity};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
