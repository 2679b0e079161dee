#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use pacha_diff::{diff_sequence, diff_text, LineSource};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
}

/// Runs both line-level engines over arbitrary text and checks the
/// properties that hold for every input:
/// - no row ever carries the `Unknown` sentinel
/// - `=` rows are equal modulo surrounding whitespace
/// - one-sided rows leave the absent pane empty
fn do_fuzz(Input { before, after }: Input<'_>) {
    for solution in [diff_text(before, after), diff_sequence(before, after)] {
        for line in solution.lines() {
            match line.source {
                LineSource::Unknown => panic!("unknown line source in solution"),
                LineSource::FromA => assert_eq!(line.right, ""),
                LineSource::FromB => assert_eq!(line.left, ""),
                LineSource::FromBoth => assert_eq!(line.left.trim(), line.right.trim()),
                LineSource::FromBothEdit => {}
            }
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
