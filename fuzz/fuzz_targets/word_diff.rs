#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use pacha_diff::diff_line;

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
}

fn do_fuzz(Input { before, after }: Input<'_>) {
    if let Some(solution) = diff_line(before, after) {
        // every word of both inputs must come back out, in order
        let left: String = solution
            .lines()
            .iter()
            .map(|line| line.left)
            .collect();
        let right: String = solution
            .lines()
            .iter()
            .map(|line| line.right)
            .collect();
        assert_eq!(left, before);
        assert_eq!(right, after);
    }
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
