//! Fuzz target for editor operation sequences.
//!
//! Drives a single editor through arbitrary edits, moves, pointer gestures
//! and resizes. No sequence may panic, and the caret must always stay on a
//! code point boundary inside the value.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::time::Duration;
use textcore::{EditorOptions, Point, TextEditor};

#[derive(Arbitrary, Debug)]
struct Session {
    single_line: bool,
    initial: String,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(String),
    SetValue(String),
    Clear,
    MoveTo(usize),
    ExtendTo(usize),
    Select { low: usize, high: usize },
    Chop,
    ChopWord,
    DeleteForward,
    DeleteWordForward,
    BreakLine,
    Left { select: bool },
    Right { select: bool },
    WordLeft { select: bool },
    WordRight { select: bool },
    Up { select: bool },
    Down { select: bool },
    LineStart,
    LineEnd,
    Cut,
    Copy,
    Paste,
    Press { x: i16, y: i16, millis: u16, extend: bool },
    Drag { x: i16, y: i16 },
    Release,
    Resize { width: u8, height: u8 },
}

fuzz_target!(|session: Session| {
    let options = EditorOptions::default().with_single_line(session.single_line);
    let mut editor = TextEditor::with_options(options);
    editor.set_value(&session.initial);
    let mut clock = 0u64;

    for op in session.ops.into_iter().take(256) {
        match op {
            Op::Insert(text) => editor.insert(&text),
            Op::SetValue(text) => editor.set_value(&text),
            Op::Clear => editor.clear(),
            Op::MoveTo(offset) => editor.move_to(offset),
            Op::ExtendTo(offset) => editor.extend_to(offset),
            Op::Select { low, high } => editor.set_selection(low, high),
            Op::Chop => editor.chop(),
            Op::ChopWord => editor.chop_word(),
            Op::DeleteForward => editor.delete_forward(),
            Op::DeleteWordForward => editor.delete_word_forward(),
            Op::BreakLine => editor.break_line(),
            Op::Left { select } if select => editor.select_left(),
            Op::Left { .. } => editor.caret_left(),
            Op::Right { select } if select => editor.select_right(),
            Op::Right { .. } => editor.caret_right(),
            Op::WordLeft { select } if select => editor.select_word_left(),
            Op::WordLeft { .. } => editor.word_left(),
            Op::WordRight { select } if select => editor.select_word_right(),
            Op::WordRight { .. } => editor.word_right(),
            Op::Up { select } if select => editor.select_up(),
            Op::Up { .. } => editor.caret_up(),
            Op::Down { select } if select => editor.select_down(),
            Op::Down { .. } => editor.caret_down(),
            Op::LineStart => editor.line_start(),
            Op::LineEnd => editor.line_end(),
            Op::Cut => editor.cut(),
            Op::Copy => editor.copy(),
            Op::Paste => editor.paste(),
            Op::Press { x, y, millis, extend } => {
                clock += u64::from(millis);
                let point = Point::new(f32::from(x) / 4.0, f32::from(y) / 4.0);
                editor.press(point, Duration::from_millis(clock), extend);
            }
            Op::Drag { x, y } => editor.drag(Point::new(f32::from(x) / 4.0, f32::from(y) / 4.0)),
            Op::Release => editor.release(),
            Op::Resize { width, height } => editor.resize(f32::from(width), f32::from(height)),
        }

        let value = editor.value();
        assert!(editor.caret() <= value.len());
        assert!(value.is_char_boundary(editor.caret()));
        assert!(value.is_char_boundary(editor.anchor()));
        if session.single_line {
            assert!(!value.contains('\n'));
        }
        let _ = editor.caret_position();
        let _ = editor.scroll();
    }
});
