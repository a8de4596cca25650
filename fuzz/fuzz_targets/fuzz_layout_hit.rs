//! Fuzz target for wrap-aware layout and hit testing.
//!
//! Lays out arbitrary text at an arbitrary width and checks that every
//! caret position hit tests back to an offset drawn at the same place.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textcore::text::{TextLayout, WrapMode};
use textcore::unicode::grapheme_boundaries;
use textcore::MonospaceTypeface;

fuzz_target!(|input: (&str, u8, u16)| {
    let (text, width, line_height) = input;
    let face = MonospaceTypeface::new(1.0, f32::from(line_height.max(1)) / 16.0);
    let width = (width > 0).then(|| f32::from(width));
    let layout = TextLayout::new(text, &face, WrapMode::Word, width);

    let rows = layout.rows();
    assert_eq!(rows.first().map(|row| row.start), Some(0));
    assert_eq!(rows.last().map(|row| row.end), Some(text.len()));

    for offset in grapheme_boundaries(text).into_iter().take(512) {
        let position = layout.caret_position(offset, false);
        let hit = layout.hit_test(position);
        assert!(text.is_char_boundary(hit.offset));
        assert_eq!(layout.caret_position(hit.offset, hit.prefer_next_line), position);
    }
});
