//! Keyboard commands and their bindings.
//!
//! Key presses resolve in two steps: [`KeyBindings`] maps a key plus
//! modifiers to an [`EditorAction`], and [`ActionTable`] maps the action to
//! the editor method that performs it. Both tables are built once per
//! editor and can be edited by the host.

use crate::input::keyboard::{KeyCode, KeyEvent, KeyModifiers};
use crate::text::TextEditor;
use std::collections::HashMap;

/// Editor command reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorAction {
    CaretLeft,
    CaretRight,
    SelectLeft,
    SelectRight,
    WordLeft,
    WordRight,
    SelectWordLeft,
    SelectWordRight,
    CaretUp,
    CaretDown,
    SelectUp,
    SelectDown,
    LineStart,
    LineEnd,
    SelectToLineStart,
    SelectToLineEnd,
    TextStart,
    TextEnd,
    SelectToTextStart,
    SelectToTextEnd,
    SelectAll,
    ClearSelection,
    /// Delete backwards (backspace).
    Chop,
    ChopWord,
    DeleteForward,
    DeleteWordForward,
    BreakLine,
    Submit,
    Cut,
    Copy,
    Paste,
}

impl EditorAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 31] = [
        Self::CaretLeft,
        Self::CaretRight,
        Self::SelectLeft,
        Self::SelectRight,
        Self::WordLeft,
        Self::WordRight,
        Self::SelectWordLeft,
        Self::SelectWordRight,
        Self::CaretUp,
        Self::CaretDown,
        Self::SelectUp,
        Self::SelectDown,
        Self::LineStart,
        Self::LineEnd,
        Self::SelectToLineStart,
        Self::SelectToLineEnd,
        Self::TextStart,
        Self::TextEnd,
        Self::SelectToTextStart,
        Self::SelectToTextEnd,
        Self::SelectAll,
        Self::ClearSelection,
        Self::Chop,
        Self::ChopWord,
        Self::DeleteForward,
        Self::DeleteWordForward,
        Self::BreakLine,
        Self::Submit,
        Self::Cut,
        Self::Copy,
        Self::Paste,
    ];
}

/// Handler run for an action.
pub type ActionHandler = fn(&mut TextEditor);

/// Map from action to handler.
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    handlers: HashMap<EditorAction, ActionHandler>,
}

impl ActionTable {
    /// Create a table with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table binding every action to the matching editor method.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        for action in EditorAction::ALL {
            table.set(action, standard_handler(action));
        }
        table
    }

    /// Install `handler` for `action`, replacing any previous one.
    pub fn set(&mut self, action: EditorAction, handler: ActionHandler) {
        self.handlers.insert(action, handler);
    }

    /// Remove the handler for `action`.
    pub fn remove(&mut self, action: EditorAction) -> Option<ActionHandler> {
        self.handlers.remove(&action)
    }

    /// Handler for `action`, if any.
    #[must_use]
    pub fn handler(&self, action: EditorAction) -> Option<ActionHandler> {
        self.handlers.get(&action).copied()
    }

    /// Run the handler for `action` on `editor`. Returns `false` if none is
    /// installed.
    pub fn dispatch(&self, action: EditorAction, editor: &mut TextEditor) -> bool {
        match self.handler(action) {
            Some(handler) => {
                handler(editor);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn standard_handler(action: EditorAction) -> ActionHandler {
    match action {
        EditorAction::CaretLeft => TextEditor::caret_left,
        EditorAction::CaretRight => TextEditor::caret_right,
        EditorAction::SelectLeft => TextEditor::select_left,
        EditorAction::SelectRight => TextEditor::select_right,
        EditorAction::WordLeft => TextEditor::word_left,
        EditorAction::WordRight => TextEditor::word_right,
        EditorAction::SelectWordLeft => TextEditor::select_word_left,
        EditorAction::SelectWordRight => TextEditor::select_word_right,
        EditorAction::CaretUp => TextEditor::caret_up,
        EditorAction::CaretDown => TextEditor::caret_down,
        EditorAction::SelectUp => TextEditor::select_up,
        EditorAction::SelectDown => TextEditor::select_down,
        EditorAction::LineStart => TextEditor::line_start,
        EditorAction::LineEnd => TextEditor::line_end,
        EditorAction::SelectToLineStart => TextEditor::select_to_line_start,
        EditorAction::SelectToLineEnd => TextEditor::select_to_line_end,
        EditorAction::TextStart => TextEditor::text_start,
        EditorAction::TextEnd => TextEditor::text_end,
        EditorAction::SelectToTextStart => TextEditor::select_to_text_start,
        EditorAction::SelectToTextEnd => TextEditor::select_to_text_end,
        EditorAction::SelectAll => TextEditor::select_all,
        EditorAction::ClearSelection => TextEditor::collapse_selection,
        EditorAction::Chop => TextEditor::chop,
        EditorAction::ChopWord => TextEditor::chop_word,
        EditorAction::DeleteForward => TextEditor::delete_forward,
        EditorAction::DeleteWordForward => TextEditor::delete_word_forward,
        EditorAction::BreakLine => TextEditor::break_line,
        EditorAction::Submit => TextEditor::submit,
        EditorAction::Cut => TextEditor::cut,
        EditorAction::Copy => TextEditor::copy,
        EditorAction::Paste => TextEditor::paste,
    }
}

/// Map from key plus modifiers to action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), EditorAction>,
}

impl KeyBindings {
    /// Create an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Common desktop bindings.
    #[must_use]
    pub fn standard() -> Self {
        use EditorAction as A;
        use KeyCode as K;

        let none = KeyModifiers::empty();
        let shift = KeyModifiers::SHIFT;
        let ctrl = KeyModifiers::CTRL;
        let ctrl_shift = KeyModifiers::CTRL | KeyModifiers::SHIFT;

        let mut bindings = Self::new();
        for (code, modifiers, action) in [
            (K::Left, none, A::CaretLeft),
            (K::Right, none, A::CaretRight),
            (K::Left, shift, A::SelectLeft),
            (K::Right, shift, A::SelectRight),
            (K::Left, ctrl, A::WordLeft),
            (K::Right, ctrl, A::WordRight),
            (K::Left, ctrl_shift, A::SelectWordLeft),
            (K::Right, ctrl_shift, A::SelectWordRight),
            (K::Up, none, A::CaretUp),
            (K::Down, none, A::CaretDown),
            (K::Up, shift, A::SelectUp),
            (K::Down, shift, A::SelectDown),
            (K::Home, none, A::LineStart),
            (K::End, none, A::LineEnd),
            (K::Home, shift, A::SelectToLineStart),
            (K::End, shift, A::SelectToLineEnd),
            (K::Home, ctrl, A::TextStart),
            (K::End, ctrl, A::TextEnd),
            (K::Home, ctrl_shift, A::SelectToTextStart),
            (K::End, ctrl_shift, A::SelectToTextEnd),
            (K::Backspace, none, A::Chop),
            (K::Backspace, shift, A::Chop),
            (K::Backspace, ctrl, A::ChopWord),
            (K::Delete, none, A::DeleteForward),
            (K::Delete, ctrl, A::DeleteWordForward),
            (K::Enter, none, A::BreakLine),
            (K::Enter, shift, A::BreakLine),
            (K::Enter, ctrl, A::Submit),
            (K::Esc, none, A::ClearSelection),
            (K::Char('a'), ctrl, A::SelectAll),
            (K::Char('x'), ctrl, A::Cut),
            (K::Char('c'), ctrl, A::Copy),
            (K::Char('v'), ctrl, A::Paste),
        ] {
            bindings.bind(KeyEvent::new(code, modifiers), action);
        }
        bindings
    }

    /// Bind a key combination, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: EditorAction) {
        self.bindings.insert((key.code, key.modifiers), action);
    }

    /// Remove a key binding.
    pub fn unbind(&mut self, key: KeyEvent) -> Option<EditorAction> {
        self.bindings.remove(&(key.code, key.modifiers))
    }

    /// Action bound to `key`, if any.
    ///
    /// Ctrl+letter bindings match either letter case.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<EditorAction> {
        if let Some(action) = self.bindings.get(&(key.code, key.modifiers)) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(c) if key.ctrl() && c.is_ascii_uppercase() => self
                .bindings
                .get(&(KeyCode::Char(c.to_ascii_lowercase()), key.modifiers))
                .copied(),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_action() {
        let table = ActionTable::standard();
        assert_eq!(table.len(), EditorAction::ALL.len());
        for action in EditorAction::ALL {
            assert!(table.handler(action).is_some(), "{action:?} has no handler");
        }
    }

    #[test]
    fn test_dispatch_runs_handler() {
        let table = ActionTable::standard();
        let mut editor = TextEditor::with_text("abc");
        assert!(table.dispatch(EditorAction::TextEnd, &mut editor));
        assert_eq!(editor.caret(), 3);
        assert!(table.dispatch(EditorAction::Chop, &mut editor));
        assert_eq!(editor.value(), "ab");
    }

    #[test]
    fn test_dispatch_missing_handler() {
        let mut table = ActionTable::standard();
        assert!(table.remove(EditorAction::Paste).is_some());
        let mut editor = TextEditor::new();
        assert!(!table.dispatch(EditorAction::Paste, &mut editor));
        assert!(ActionTable::new().is_empty());
    }

    #[test]
    fn test_custom_handler() {
        let mut table = ActionTable::standard();
        table.set(EditorAction::Submit, |editor| editor.insert("!"));
        let mut editor = TextEditor::new();
        table.dispatch(EditorAction::Submit, &mut editor);
        assert_eq!(editor.value(), "!");
    }

    #[test]
    fn test_standard_bindings() {
        let bindings = KeyBindings::standard();
        assert_eq!(
            bindings.resolve(&KeyEvent::key(KeyCode::Left)),
            Some(EditorAction::CaretLeft)
        );
        assert_eq!(
            bindings.resolve(&KeyEvent::with_shift(KeyCode::End)),
            Some(EditorAction::SelectToLineEnd)
        );
        assert_eq!(
            bindings.resolve(&KeyEvent::new(
                KeyCode::Right,
                KeyModifiers::CTRL | KeyModifiers::SHIFT
            )),
            Some(EditorAction::SelectWordRight)
        );
        assert_eq!(
            bindings.resolve(&KeyEvent::with_ctrl(KeyCode::Backspace)),
            Some(EditorAction::ChopWord)
        );
        assert_eq!(bindings.resolve(&KeyEvent::char('a')), None);
    }

    #[test]
    fn test_ctrl_letters_ignore_case() {
        let bindings = KeyBindings::standard();
        assert_eq!(
            bindings.resolve(&KeyEvent::with_ctrl(KeyCode::Char('V'))),
            Some(EditorAction::Paste)
        );
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut bindings = KeyBindings::standard();
        let tab = KeyEvent::key(KeyCode::Tab);
        assert_eq!(bindings.resolve(&tab), None);
        bindings.bind(tab, EditorAction::SelectAll);
        assert_eq!(bindings.resolve(&tab), Some(EditorAction::SelectAll));
        assert_eq!(bindings.unbind(tab), Some(EditorAction::SelectAll));
        assert_eq!(bindings.resolve(&tab), None);
    }
}
