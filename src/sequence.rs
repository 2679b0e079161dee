use log::trace;

use crate::solution::{LineSource, Solution};
use crate::Solver;

/// Scoring weights for [`SequenceAligner`].
///
/// `matched` dominates every other weight so the optimizer prefers alignments
/// that maximize matched lines. `mismatch` is only mildly negative so pairing
/// two close lines still beats skipping both. `new_mode` penalizes starting a
/// new block of a different kind; it is wired through the scoring but kept at
/// zero until a block-locality policy is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Weights {
    pub deletion: i32,
    pub matched: i32,
    pub mismatch: i32,
    pub new_mode: i32,
}

impl Default for Weights {
    fn default() -> Weights {
        Weights {
            deletion: -2,
            matched: 100,
            mismatch: -1,
            new_mode: 0,
        }
    }
}

/// The kind of alignment block a move belongs to. Only consulted for the
/// `new_mode` transition weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockMode {
    Beginning,
    DeleteA,
    DeleteB,
    Match,
    Mismatch,
}

fn move_mode(mv: LineSource) -> Option<BlockMode> {
    match mv {
        LineSource::FromA => Some(BlockMode::DeleteA),
        LineSource::FromB => Some(BlockMode::DeleteB),
        LineSource::FromBoth => Some(BlockMode::Match),
        LineSource::FromBothEdit => Some(BlockMode::Mismatch),
        LineSource::Unknown => None,
    }
}

/// Aligns two sequences of lines with a memoized dynamic program.
///
/// The aligner owns an `|A| x |B|` score table and a back-pointer table of the
/// same shape; both are filled during [`solve`](SequenceAligner::solve) and
/// released when the aligner is dropped. The tables are filled iteratively
/// from the bottom-right corner instead of by recursion, so deep inputs cannot
/// overflow the stack.
///
/// Equality is byte-wise by default; with
/// [`ignore_whitespace`](SequenceAligner::ignore_whitespace) two lines compare
/// equal when they match after trimming surrounding whitespace.
pub struct SequenceAligner<'a, 's> {
    a: &'s [&'a str],
    b: &'s [&'a str],
    scores: Vec<i32>,
    moves: Vec<LineSource>,
    ignore_whitespace: bool,
    weights: Weights,
}

impl<'a, 's> SequenceAligner<'a, 's> {
    /// Creates an aligner over two borrowed line sequences.
    pub fn new(a: &'s [&'a str], b: &'s [&'a str]) -> SequenceAligner<'a, 's> {
        SequenceAligner {
            a,
            b,
            scores: Vec::new(),
            moves: Vec::new(),
            ignore_whitespace: false,
            weights: Weights::default(),
        }
    }

    /// Compare lines modulo surrounding whitespace.
    pub fn ignore_whitespace(mut self, yes: bool) -> SequenceAligner<'a, 's> {
        self.ignore_whitespace = yes;
        self
    }

    fn lines_equal(&self, a: &str, b: &str) -> bool {
        if self.ignore_whitespace {
            a.trim() == b.trim()
        } else {
            a == b
        }
    }

    /// Computes the alignment.
    pub fn solve(&mut self) -> Solution<'a> {
        let mut solution = Solution::new();

        // right side only?
        if self.a.len() == 1 && self.a[0].is_empty() {
            for &line in self.b {
                solution.push_b(line);
            }
            return solution;
        }

        // left side only?
        if self.b.len() == 1 && self.b[0].is_empty() {
            for &line in self.a {
                solution.push_a(line);
            }
            return solution;
        }

        // copy over the shared prefix
        let mut i = 0;
        while i < self.a.len() && i < self.b.len() {
            if !self.lines_equal(self.a[i], self.b[i]) {
                break;
            }
            solution.push(self.a[i], self.b[i], LineSource::FromBoth);
            i += 1;
        }
        let entry_mode = if i > 0 {
            BlockMode::Match
        } else {
            BlockMode::Beginning
        };

        trace!(
            "aligning {}x{} lines starting at offset {i}",
            self.a.len(),
            self.b.len()
        );
        self.fill_tables(i, entry_mode);
        self.reconstruct(&mut solution, i, i);
        solution
    }

    /// Fills the score and back-pointer tables for every cell reachable from
    /// the entry point `(start, start)`, walking the rectangle bottom-up so
    /// each cell only ever reads already-resolved successors.
    fn fill_tables(&mut self, start: usize, entry_mode: BlockMode) {
        let (m, n) = (self.a.len(), self.b.len());
        self.scores = vec![0; m * n];
        self.moves = vec![LineSource::Unknown; m * n];
        if start >= m || start >= n {
            return;
        }
        for ai in (start..m).rev() {
            for bi in (start..n).rev() {
                self.fill_cell(ai, bi, None);
            }
        }
        if self.weights.new_mode != 0 {
            // the entry cell additionally pays for the transition out of the
            // block mode the shared prefix ended in
            self.fill_cell(start, start, Some(entry_mode));
        }
    }

    fn fill_cell(&mut self, ai: usize, bi: usize, entry: Option<BlockMode>) {
        let w = self.weights;
        let mut best = i32::MIN;
        let mut best_move = LineSource::Unknown;

        // skip a, addition in b (deletion in a)
        let mut score = self.lookup(ai + 1, bi) + w.deletion
            + self.transition_weight(BlockMode::DeleteA, ai + 1, bi);
        if let Some(mode) = entry {
            if mode != BlockMode::DeleteA {
                score += w.new_mode;
            }
        }
        if score >= best {
            best = score;
            best_move = LineSource::FromA;
        }

        // skip b, addition in a (deletion in b)
        let mut score = self.lookup(ai, bi + 1) + w.deletion
            + self.transition_weight(BlockMode::DeleteB, ai, bi + 1);
        if let Some(mode) = entry {
            if mode != BlockMode::DeleteB {
                score += w.new_mode;
            }
        }
        if score >= best {
            best = score;
            best_move = LineSource::FromB;
        }

        // align both lines, matched or edited
        let (mode, weight, mv) = if self.lines_equal(self.a[ai], self.b[bi]) {
            (BlockMode::Match, w.matched, LineSource::FromBoth)
        } else {
            (BlockMode::Mismatch, w.mismatch, LineSource::FromBothEdit)
        };
        let mut score =
            self.lookup(ai + 1, bi + 1) + weight + self.transition_weight(mode, ai + 1, bi + 1);
        if let Some(entry_mode) = entry {
            if entry_mode != mode {
                score += w.new_mode;
            }
        }
        if score >= best {
            best = score;
            best_move = mv;
        }

        let idx = ai * self.b.len() + bi;
        self.scores[idx] = best;
        self.moves[idx] = best_move;
    }

    fn lookup(&self, ai: usize, bi: usize) -> i32 {
        if ai >= self.a.len() || bi >= self.b.len() {
            return 0;
        }
        self.scores[ai * self.b.len() + bi]
    }

    /// Cost of switching into `mode` given the move recorded at the successor
    /// cell `(ai, bi)`. Free while `new_mode` is zero.
    fn transition_weight(&self, mode: BlockMode, ai: usize, bi: usize) -> i32 {
        if self.weights.new_mode == 0 {
            return 0;
        }
        if ai >= self.a.len() || bi >= self.b.len() {
            return 0;
        }
        match move_mode(self.moves[ai * self.b.len() + bi]) {
            Some(next) if next != mode => self.weights.new_mode,
            _ => 0,
        }
    }

    /// Walks the back-pointer table from `(a, b)` and appends the encoded
    /// moves to `solution`.
    fn reconstruct(&self, solution: &mut Solution<'a>, mut a: usize, mut b: usize) {
        let n = self.b.len();
        while a < self.a.len() || b < self.b.len() {
            // no more a
            if a == self.a.len() {
                solution.push_b(self.b[b]);
                b += 1;
                continue;
            }

            // no more b
            if b == self.b.len() {
                solution.push_a(self.a[a]);
                a += 1;
                continue;
            }

            match self.moves[a * n + b] {
                LineSource::FromA => {
                    solution.push_a(self.a[a]);
                    a += 1;
                }
                LineSource::FromB => {
                    solution.push_b(self.b[b]);
                    b += 1;
                }
                source @ (LineSource::FromBoth | LineSource::FromBothEdit) => {
                    solution.push(self.a[a], self.b[b], source);
                    a += 1;
                    b += 1;
                }
                LineSource::Unknown => {
                    unreachable!("unresolved back-pointer at ({a}, {b})")
                }
            }
        }
    }
}

impl<'a, 's> Solver<'a> for SequenceAligner<'a, 's> {
    fn solve(&mut self) -> Solution<'a> {
        SequenceAligner::solve(self)
    }
}
