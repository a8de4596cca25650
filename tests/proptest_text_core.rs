//! Property-based tests for the text editing core.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use std::time::Duration;
use textcore::input::{ClickState, Granularity};
use textcore::text::{
    MonospaceTypeface, TextLayout, TextStore, WrapMode, layout_rows, word_back, word_front,
};
use textcore::unicode::grapheme_boundaries;
use textcore::{ClickOptions, Point, TextEditor};

// ============================================================================
// Strategies
// ============================================================================

/// Text built from a small alphabet that exercises every word class, wide
/// and combining characters, and each line break flavor.
fn editor_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "Z", "7", " ", "  ", ".", "-", "\n", "\r\n", "é", "中", "e\u{301}",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Text that does not start with whitespace or a line break.
fn word_led_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["a", "Z", "7", ".", "中", "e\u{301}"]),
        editor_text(),
    )
        .prop_map(|(head, tail)| format!("{head}{tail}"))
}

fn wrap_width() -> impl Strategy<Value = Option<f32>> {
    prop::option::of((3u8..30).prop_map(f32::from))
}

/// Line heights typical of real fonts, most of them not exactly representable.
fn line_height() -> impl Strategy<Value = f32> {
    prop_oneof![Just(1.0f32), 0.5f32..64.0]
}

// ============================================================================
// Layout Properties
// ============================================================================

proptest! {
    /// Every caret position maps back to an offset drawn at the same place.
    #[test]
    fn caret_position_round_trips(
        text in editor_text(),
        width in wrap_width(),
        line_height in line_height(),
    ) {
        let face = MonospaceTypeface::new(1.0, line_height);
        let layout = TextLayout::new(&text, &face, WrapMode::Word, width);
        for offset in grapheme_boundaries(&text) {
            for prefer in [false, true] {
                let position = layout.caret_position(offset, prefer);
                let hit = layout.hit_test(position);
                prop_assert_eq!(
                    layout.caret_position(hit.offset, hit.prefer_next_line),
                    position,
                    "offset {} (prefer {}, line height {}) in {:?}",
                    offset,
                    prefer,
                    line_height,
                    text
                );
                prop_assert_eq!(hit.offset, layout.nearest_offset(position));
            }
        }
    }

    /// Rows are ordered, disjoint and cover the text from start to end.
    #[test]
    fn rows_cover_text_in_order(text in editor_text(), width in wrap_width()) {
        let face = MonospaceTypeface::default();
        let rows = layout_rows(&text, &face, WrapMode::Word, width);
        prop_assert!(!rows.is_empty());
        prop_assert_eq!(rows[0].start, 0);
        prop_assert_eq!(rows[rows.len() - 1].end, text.len());
        for pair in rows.windows(2) {
            prop_assert!(pair[0].start <= pair[0].end);
            prop_assert!(pair[0].end <= pair[1].start);
            if pair[0].is_soft_wrapped() {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    /// A soft-wrapped row only overflows when its first word alone is too wide.
    #[test]
    fn soft_rows_fit_unless_single_word(text in editor_text(), width in 3u8..30) {
        let face = MonospaceTypeface::default();
        let width = f32::from(width);
        for row in layout_rows(&text, &face, WrapMode::Word, Some(width)) {
            let visible = text[row.range()].trim_end();
            let measured = textcore::Typeface::measure(&face, visible);
            if measured > width {
                let first = word_front(&text[row.range()], false);
                prop_assert_eq!(first.len(), row.end - row.start, "row {:?} of {:?}", row, text);
            }
        }
    }
}

// ============================================================================
// Boundary Properties
// ============================================================================

proptest! {
    /// Scanning a leading word back from its end recovers the whole word.
    #[test]
    fn word_scanning_is_symmetric(text in word_led_text()) {
        let front = word_front(&text, false);
        prop_assert!(!front.is_empty());
        prop_assert_eq!(word_back(front, false), front);
    }

    /// Words are prefixes/suffixes of the scanned text.
    #[test]
    fn words_are_slices_of_their_input(text in editor_text(), exclude in any::<bool>()) {
        prop_assert!(text.starts_with(word_front(&text, exclude)));
        prop_assert!(text.ends_with(word_back(&text, exclude)));
    }
}

// ============================================================================
// Editing Properties
// ============================================================================

proptest! {
    /// Replacing a collapsed selection with nothing leaves the value unchanged.
    #[test]
    fn empty_replace_is_identity(text in editor_text(), at in 0usize..200) {
        let mut store = TextStore::with_text(&text);
        let at = at.min(text.len());
        let value = store.replace(at..at, "").unwrap();
        prop_assert_eq!(value.as_str(), text.as_str());
    }

    /// Requested caret offsets are clamped onto a code point boundary.
    #[test]
    fn caret_offsets_are_clamped(text in editor_text(), offset in 0usize..300) {
        let mut editor = TextEditor::with_text(&text);
        editor.move_to(offset);
        prop_assert!(editor.caret() <= text.len());
        prop_assert!(text.is_char_boundary(editor.caret()));
        editor.extend_to(offset / 2);
        prop_assert!(text.is_char_boundary(editor.anchor()));
        prop_assert!(editor.selection().end <= text.len());
    }

    /// Typing a character and deleting it restores the value.
    #[test]
    fn insert_then_chop_restores(text in editor_text(), at in 0usize..200, c in "[a-z ]") {
        let mut editor = TextEditor::with_text(&text);
        let at = grapheme_boundaries(&text)
            .into_iter()
            .rfind(|&b| b <= at)
            .unwrap_or(0);
        editor.move_to(at);
        editor.insert(&c);
        prop_assert_eq!(editor.caret(), at + c.len());
        editor.chop();
        prop_assert_eq!(editor.value(), text.as_str());
        prop_assert_eq!(editor.caret(), at);
    }
}

// ============================================================================
// Gesture Properties
// ============================================================================

proptest! {
    /// Presses inside the window cycle 0, 1, 2 and then wrap back to 0.
    #[test]
    fn click_counts_cycle(
        start in 0u64..10_000,
        gaps in prop::array::uniform3(0u64..=500),
        jitter in prop::array::uniform4((-1.5f32..1.5, -1.5f32..1.5)),
    ) {
        let options = ClickOptions::default();
        let mut state = ClickState::new();
        let base = Point::new(40.0, 40.0);
        let mut time = start;
        let mut counts = Vec::new();
        for (idx, (dx, dy)) in jitter.into_iter().enumerate() {
            if idx > 0 {
                time += gaps[idx - 1];
            }
            let point = Point::new(base.x + dx, base.y + dy);
            state.press(Duration::from_millis(time), point, &options);
            counts.push(state.count());
        }
        prop_assert_eq!(counts, vec![0, 1, 2, 0]);
    }

    /// A press far away always starts over.
    #[test]
    fn distant_press_resets(dx in 6.0f32..500.0, gap in 0u64..=500) {
        let options = ClickOptions::default();
        let mut state = ClickState::new();
        state.press(Duration::ZERO, Point::new(0.0, 0.0), &options);
        let granularity = state.press(Duration::from_millis(gap), Point::new(dx, 0.0), &options);
        prop_assert_eq!(granularity, Granularity::Character);
    }
}
