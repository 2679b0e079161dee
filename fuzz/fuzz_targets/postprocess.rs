#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use pacha_diff::{LineSource, Solution};

#[derive(arbitrary::Arbitrary, Debug)]
struct Row<'a> {
    left: &'a str,
    right: &'a str,
    source: u8,
}

fn source(tag: u8) -> LineSource {
    match tag % 4 {
        0 => LineSource::FromA,
        1 => LineSource::FromB,
        2 => LineSource::FromBoth,
        _ => LineSource::FromBothEdit,
    }
}

fn pane_contents(solution: &Solution) -> (Vec<String>, Vec<String>) {
    let mut lefts: Vec<String> = solution
        .lines()
        .iter()
        .map(|line| format!("{}{}", line.source.as_str(), line.left))
        .collect();
    let mut rights: Vec<String> = solution
        .lines()
        .iter()
        .map(|line| format!("{}{}", line.source.as_str(), line.right))
        .collect();
    lefts.sort_unstable();
    rights.sort_unstable();
    (lefts, rights)
}

/// The shift pass may reorder rows but must preserve the length and the
/// per-tag multiset of pane contents, for any solution whatsoever.
fn do_fuzz(rows: Vec<Row<'_>>) {
    let mut solution = Solution::new();
    for row in &rows {
        solution.push(row.left, row.right, source(row.source));
    }
    let before = pane_contents(&solution);
    let len = solution.len();

    solution.post_process();

    assert_eq!(solution.len(), len);
    assert_eq!(pane_contents(&solution), before);
}

fuzz_target!(|rows: Vec<Row<'_>>| {
    do_fuzz(rows);
});
