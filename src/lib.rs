#![deny(missing_docs)]
//! Pacha-diff is a two-way ("pacha" means twin in Swahili) diff library for
//! Rust that produces line-aligned solutions built for side-by-side
//! rendering.
//!
//! Instead of an edit script, the engine returns a [`Solution`]: an ordered
//! sequence of rows, each carrying the pre-image pane, the post-image pane
//! and a [`LineSource`] tag telling a formatter which side(s) the row came
//! from. A row is a deletion (`<`), an addition (`>`), an identical pair
//! (`=`) or an edited pair (`~`), which is all a renderer needs to lay the
//! two texts out next to each other.
//!
//! # How diffs are computed
//!
//! [`diff_text`] first partitions the two inputs with a histogram heuristic:
//! runs of lines whose trimmed content occurs rarely in the pre-image make
//! unambiguous anchors (a function signature pins a position, a closing brace
//! does not), and the longest rare-anchored runs are matched up verbatim.
//! The gaps left between anchors are small, so they can be aligned exactly
//! with a memoized dynamic program over the gap's score matrix. A final
//! post-processing pass slides pure addition/deletion blocks past matching
//! lines so that appended content reads as appended. The same dynamic
//! program is reused by [`diff_line`] to highlight the changed words inside
//! an edited line pair.
//!
//! The engine trades minimality for readability: solutions are sometimes
//! longer than the theoretical optimum but follow how a human would describe
//! the change.
//!
//! # Examples
//!
//! ```
//! use pacha_diff::{diff_text, LineSource};
//!
//! let solution = diff_text("aaa\nccc", "aaa\nbbb\nccc");
//! let tags: String = solution
//!     .lines()
//!     .iter()
//!     .map(|line| line.source.as_str())
//!     .collect();
//! assert_eq!(tags, "=>=");
//!
//! let added: Vec<_> = solution
//!     .lines()
//!     .iter()
//!     .filter(|line| line.source == LineSource::FromB)
//!     .map(|line| line.right)
//!     .collect();
//! assert_eq!(added, ["bbb"]);
//! ```
//!
//! Edited line pairs can be refined into word-level rows:
//!
//! ```
//! use pacha_diff::diff_line;
//!
//! let words = diff_line("foo bar", "foo baz").unwrap();
//! let tags: String = words
//!     .lines()
//!     .iter()
//!     .map(|line| line.source.as_str())
//!     .collect();
//! assert_eq!(tags, "=~");
//! ```

pub use crate::histogram::HistogramDiffer;
pub use crate::sequence::SequenceAligner;
pub use crate::solution::{Line, LineSource, Solution};

#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "formatter")]
pub mod formatter;
mod histogram;
mod postprocess;
mod sequence;
mod solution;
mod tokenize;

#[cfg(test)]
mod tests;

/// Cap on `|words(a)| * |words(b)|` in [`diff_line`]; anything above it would
/// make the word-level score matrix pathologically large (think minified
/// single-line javascript) and is not worth highlighting.
const MAX_LINE_DIFF_CELLS: usize = 100_000_000;

/// Common interface of the diff engines.
pub trait Solver<'a> {
    /// Computes the diff solution.
    fn solve(&mut self) -> Solution<'a>;
}

/// Diffs two texts line by line with the histogram engine.
///
/// Inputs are split on `'\n'` (a trailing `'\r'` stays part of the line).
/// Matched regions compare equal modulo surrounding whitespace and repeat the
/// pre-image text on both panes; the gaps in between are aligned exactly and
/// the result is post-processed for block locality.
pub fn diff_text<'a>(a: &'a str, b: &'a str) -> Solution<'a> {
    let a = tokenize::split_lines(a);
    let b = tokenize::split_lines(b);
    HistogramDiffer::new(&a, &b).solve()
}

/// Diffs two texts line by line with the plain sequence aligner, comparing
/// lines modulo surrounding whitespace.
///
/// This skips the histogram partitioning and the post-processing pass, so it
/// is only suitable for small inputs: time and memory are proportional to
/// `|A| * |B|`. Lines equal after trimming come out as `=` rows that still
/// carry both original texts, which is how whitespace-only changes stay
/// visible to formatters.
pub fn diff_sequence<'a>(a: &'a str, b: &'a str) -> Solution<'a> {
    let a = tokenize::split_lines(a);
    let b = tokenize::split_lines(b);
    SequenceAligner::new(&a, &b).ignore_whitespace(true).solve()
}

/// Diffs two single lines word by word, for highlighting the edits inside a
/// `~` row.
///
/// Words are maximal runs terminated by (and including) a non-alphanumeric
/// character. Returns `None` when the inputs tokenize into so many words that
/// aligning them is unreasonable; callers fall back to whole-line
/// presentation.
pub fn diff_line<'a>(a: &'a str, b: &'a str) -> Option<Solution<'a>> {
    let a = tokenize::split_words(a);
    let b = tokenize::split_words(b);
    if a.len().saturating_mul(b.len()) > MAX_LINE_DIFF_CELLS {
        return None;
    }
    Some(SequenceAligner::new(&a, &b).solve())
}
