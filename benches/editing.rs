//! Editing and layout benchmarks.
//!
//! Covers the per-keystroke hot paths: typing at the caret, wrapping a
//! paragraph, mapping caret offsets to positions and hit testing points.

#![allow(clippy::semicolon_if_nothing_returned)]
#![allow(clippy::cast_precision_loss)] // Benchmarks use small, bounded values for clarity.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textcore::text::{TextLayout, WrapMode, layout_rows, word_back, word_front};
use textcore::{MonospaceTypeface, Point, TextEditor};

fn paragraph(words: usize) -> String {
    let vocabulary = ["lorem", "ipsum", "dolor", "sit", "amet,", "consectetur", "adipiscing"];
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(if i % 40 == 0 { '\n' } else { ' ' });
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
    }
    text
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    group.bench_function("append_200_chars", |b| {
        b.iter(|| {
            let mut editor = TextEditor::new();
            for i in 0..200 {
                let typed = if i % 7 == 6 { " " } else { "x" };
                editor.insert(black_box(typed));
            }
            black_box(editor.value().len())
        })
    });

    let text = paragraph(400);
    group.bench_function("type_mid_paragraph_wrapped", |b| {
        b.iter(|| {
            let mut editor = TextEditor::with_text(&text);
            editor.resize(60.0, 20.0);
            editor.move_to(text.len() / 2);
            for _ in 0..20 {
                editor.insert(black_box("y"));
                black_box(editor.caret_position());
            }
        })
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let face = MonospaceTypeface::default();
    let mut group = c.benchmark_group("layout");

    for words in [100, 1_000, 5_000] {
        let text = paragraph(words);
        group.bench_with_input(BenchmarkId::new("wrap_rows", words), &text, |b, text| {
            b.iter(|| layout_rows(black_box(text), &face, WrapMode::Word, Some(80.0)))
        });
    }

    let text = paragraph(1_000);
    let layout = TextLayout::new(&text, &face, WrapMode::Word, Some(80.0));
    let rows = layout.row_count() as f32;

    group.bench_function("caret_position_1k_words", |b| {
        b.iter(|| layout.caret_position(black_box(text.len() / 2), false))
    });

    group.bench_function("hit_test_1k_words", |b| {
        b.iter(|| layout.hit_test(black_box(Point::new(37.3, rows / 2.0))))
    });

    group.finish();
}

fn bench_boundaries(c: &mut Criterion) {
    let text = paragraph(1_000);
    let mut group = c.benchmark_group("boundary");

    group.bench_function("word_walk_forward", |b| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut words = 0;
            while !rest.is_empty() {
                let word = word_front(rest, false);
                rest = &rest[word.len()..];
                words += 1;
            }
            black_box(words)
        })
    });

    group.bench_function("word_walk_backward", |b| {
        b.iter(|| {
            let mut rest = text.as_str();
            let mut words = 0;
            while !rest.is_empty() {
                let word = word_back(rest, false);
                rest = &rest[..rest.len() - word.len()];
                words += 1;
            }
            black_box(words)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_typing, bench_layout, bench_boundaries);
criterion_main!(benches);
