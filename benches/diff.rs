use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pacha_diff::{diff_line, diff_sequence, diff_text};

/// Deterministic source-like text: function headers, indented bodies, blank
/// lines and plenty of repeated closing braces to stress the histogram.
fn synthetic_source(seed: u32, lines: usize) -> String {
    let mut text = String::new();
    let mut state = seed;
    for i in 0..lines {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        match state % 5 {
            0 => text.push_str("}\n"),
            1 => {
                text.push_str("fn item_");
                text.push_str(&i.to_string());
                text.push_str("() {\n");
            }
            2 => {
                text.push_str("    let value = compute(");
                text.push_str(&(state % 1024).to_string());
                text.push_str(");\n");
            }
            3 => {
                text.push_str("    value.process(");
                text.push_str(&(state % 7).to_string());
                text.push_str(");\n");
            }
            _ => text.push('\n'),
        }
    }
    text
}

/// Drops every 13th line and inserts a new one every 17th, which yields a
/// realistic mix of small scattered hunks.
fn mutate(text: &str) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        if i % 17 == 3 {
            out.push_str("    log_state(&value);\n");
        }
        if i % 13 == 7 {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn bench_diffs(c: &mut Criterion) {
    let before = synthetic_source(0x5eed, 600);
    let after = mutate(&before);
    c.bench_function("histogram_600_lines", |b| {
        b.iter(|| diff_text(black_box(&before), black_box(&after)))
    });

    let before = synthetic_source(0x5eed, 120);
    let after = mutate(&before);
    c.bench_function("sequence_120_lines", |b| {
        b.iter(|| diff_sequence(black_box(&before), black_box(&after)))
    });

    let before = "let total = items.iter().map(|item| item.price * item.count).sum::<u64>();";
    let after = "let total = items.iter().map(|item| item.cost * item.amount).sum::<u64>();";
    c.bench_function("word_diff", |b| {
        b.iter(|| diff_line(black_box(before), black_box(after)))
    });
}

criterion_group!(benches, bench_diffs);
criterion_main!(benches);
