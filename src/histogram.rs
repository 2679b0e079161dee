use std::ops::Range;

use ahash::RandomState;
use hashbrown::HashMap;
use log::debug;

use crate::sequence::SequenceAligner;
use crate::solution::{LineSource, Solution};
use crate::Solver;

/// Gaps whose score matrix would exceed this many cells are not aligned but
/// emitted as the full removal run followed by the full addition run. The
/// locator keeps gaps small on real input, so this only triggers on files the
/// anchoring found nothing in common with.
const MAX_ALIGN_CELLS: usize = 1 << 22;

/// Occurrence lists of the trimmed pre-image lines within the current
/// sub-range. Rebuilt for every recursion step, never cached across calls.
type Histogram<'a> = HashMap<&'a str, Vec<u32>, RandomState>;

/// A diagonal run of trimmed-equal lines. `start` is inclusive, `end`
/// exclusive, and both sides have the same length.
///
/// `match_score` is the smallest occurrence count seen while growing the
/// region; a low score means the region is anchored on rare lines and
/// therefore pins its position unambiguously.
#[derive(Debug, Clone, Copy)]
struct MatchRegion {
    a_start: u32,
    a_end: u32,
    b_start: u32,
    b_end: u32,
    match_score: u32,
}

impl MatchRegion {
    fn len(&self) -> u32 {
        self.a_end - self.a_start
    }
}

/// Line diff engine that partitions the input around rarely occurring lines.
///
/// The differ recursively picks the longest run of trimmed-equal lines
/// anchored on low-occurrence content, emits it verbatim, and hands the
/// remaining gaps between anchors to [`SequenceAligner`]. Rare lines (a
/// function signature, a unique identifier) make much better anchors than
/// boilerplate like `}`, which is what keeps the output readable on source
/// code.
pub struct HistogramDiffer<'a, 's> {
    a: &'s [&'a str],
    b: &'s [&'a str],
    trimmed_a: Vec<&'a str>,
    trimmed_b: Vec<&'a str>,
}

impl<'a, 's> HistogramDiffer<'a, 's> {
    /// Creates a differ over two borrowed line sequences.
    pub fn new(a: &'s [&'a str], b: &'s [&'a str]) -> HistogramDiffer<'a, 's> {
        HistogramDiffer {
            a,
            b,
            trimmed_a: a.iter().map(|line| line.trim()).collect(),
            trimmed_b: b.iter().map(|line| line.trim()).collect(),
        }
    }

    fn eq(&self, a_idx: u32, b_idx: u32) -> bool {
        self.trimmed_a[a_idx as usize] == self.trimmed_b[b_idx as usize]
    }

    fn histogram(&self, a_start: u32, a_end: u32) -> Histogram<'a> {
        let mut histogram =
            Histogram::with_capacity_and_hasher((a_end - a_start) as usize, RandomState::new());
        for i in a_start..a_end {
            histogram
                .entry(self.trimmed_a[i as usize])
                .or_default()
                .push(i);
        }
        histogram
    }

    fn occurrences(histogram: &Histogram<'a>, line: &str) -> u32 {
        histogram.get(line).map_or(0, |indices| indices.len() as u32)
    }

    /// Finds the longest matching region within the given sub-ranges,
    /// preferring regions anchored on low-occurrence lines.
    ///
    /// The sweep walks B upward and, for every occurrence of the current B
    /// line in A, grows the minimal seed region in both directions as long as
    /// the trimmed lines keep matching. A candidate replaces the running best
    /// when it is longer, or rarer at equal length. Spans covered by a region
    /// are skipped on both sides, which keeps the sweep near-linear.
    fn longest_substring(
        &self,
        a_start: u32,
        a_end: u32,
        b_start: u32,
        b_end: u32,
    ) -> Option<MatchRegion> {
        let mut best_match: Option<MatchRegion> = None;
        let mut best_score = a_end - a_start;
        let histogram = self.histogram(a_start, a_end);

        let mut b_idx = b_start;
        while b_idx < b_end {
            let mut next_b = b_idx + 1;
            let line_b = self.trimmed_b[b_idx as usize];

            // only consider low-occurrence lines
            if Self::occurrences(&histogram, line_b) > best_score {
                b_idx = next_b;
                continue;
            }

            let matches = histogram
                .get(line_b)
                .map_or(&[][..], |indices| indices.as_slice());
            let mut prev_a = a_start;
            for &a_idx in matches {
                // skip occurrences consumed by the previous region this sweep
                if a_idx < prev_a {
                    continue;
                }

                // minimal seed, then grow it in both directions
                let mut region = MatchRegion {
                    a_start: a_idx,
                    a_end: a_idx + 1,
                    b_start: b_idx,
                    b_end: b_idx + 1,
                    match_score: a_end - a_start,
                };

                while region.a_start > a_start
                    && region.b_start > b_start
                    && self.eq(region.a_start - 1, region.b_start - 1)
                {
                    region.a_start -= 1;
                    region.b_start -= 1;
                    if region.match_score > 1 {
                        let occurrences =
                            Self::occurrences(&histogram, self.trimmed_a[region.a_start as usize]);
                        region.match_score = region.match_score.min(occurrences);
                    }
                }

                while region.a_end < a_end
                    && region.b_end < b_end
                    && self.eq(region.a_end, region.b_end)
                {
                    if region.match_score > 1 {
                        let occurrences =
                            Self::occurrences(&histogram, self.trimmed_a[region.a_end as usize]);
                        region.match_score = region.match_score.min(occurrences);
                    }
                    region.a_end += 1;
                    region.b_end += 1;
                }

                // longer wins, rarer breaks ties
                if best_match.map_or(0, |best| best.len()) < region.len()
                    || region.match_score < best_score
                {
                    best_score = region.match_score;
                    best_match = Some(region);
                }

                if next_b < region.b_end {
                    next_b = region.b_end;
                }
                prev_a = region.a_end;
            }
            b_idx = next_b;
        }
        best_match
    }

    /// Collects the matching regions for the given sub-ranges in order:
    /// everything left of the longest match, the match itself, then everything
    /// right of it.
    fn solve_range(
        &self,
        a_start: u32,
        a_end: u32,
        b_start: u32,
        b_end: u32,
        regions: &mut Vec<MatchRegion>,
    ) {
        if b_end - b_start <= 1 || a_end - a_start <= 1 {
            return;
        }
        let Some(region) = self.longest_substring(a_start, a_end, b_start, b_end) else {
            return;
        };
        self.solve_range(a_start, region.a_start, b_start, region.b_start, regions);
        regions.push(region);
        self.solve_range(region.a_end, a_end, region.b_end, b_end, regions);
    }

    /// Computes the full solution: matched regions are copied through
    /// verbatim, the gaps between them are aligned, and the concatenation is
    /// post-processed.
    pub fn solve(&self) -> Solution<'a> {
        let mut regions = Vec::new();
        self.solve_range(
            0,
            self.a.len() as u32,
            0,
            self.b.len() as u32,
            &mut regions,
        );
        debug!(
            "{} matched regions over {}x{} lines",
            regions.len(),
            self.a.len(),
            self.b.len()
        );

        let mut solution = Solution::new();
        let (mut prev_a_end, mut prev_b_end) = (0, 0);
        for region in &regions {
            self.align_gap(
                &mut solution,
                prev_a_end..region.a_start,
                prev_b_end..region.b_start,
            );

            // matched anchors repeat the pre-image text on both panes
            for &line in &self.a[region.a_start as usize..region.a_end as usize] {
                solution.push(line, line, LineSource::FromBoth);
            }

            prev_a_end = region.a_end;
            prev_b_end = region.b_end;
        }

        self.align_gap(
            &mut solution,
            prev_a_end..self.a.len() as u32,
            prev_b_end..self.b.len() as u32,
        );
        solution.post_process();
        solution
    }

    fn align_gap(&self, solution: &mut Solution<'a>, a: Range<u32>, b: Range<u32>) {
        let gap_a = &self.a[a.start as usize..a.end as usize];
        let gap_b = &self.b[b.start as usize..b.end as usize];
        if gap_a.len() * gap_b.len() > MAX_ALIGN_CELLS {
            debug!(
                "gap of {}x{} lines is too large to align, emitting verbatim",
                gap_a.len(),
                gap_b.len()
            );
            for &line in gap_a {
                solution.push_a(line);
            }
            for &line in gap_b {
                solution.push_b(line);
            }
            return;
        }
        solution.append(SequenceAligner::new(gap_a, gap_b).solve());
    }
}

impl<'a, 's> Solver<'a> for HistogramDiffer<'a, 's> {
    fn solve(&mut self) -> Solution<'a> {
        HistogramDiffer::solve(self)
    }
}
