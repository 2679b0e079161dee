use crate::solution::{LineSource, Solution};

impl<'a> Solution<'a> {
    /// Slides pure-addition and pure-deletion runs forward past matching
    /// lines, so a diff of the form
    ///
    /// ```text
    /// a [b c d] b c
    /// ```
    ///
    /// becomes
    ///
    /// ```text
    /// a b c [d b c]
    /// ```
    ///
    /// which matches the human reading that the new block was appended. Only
    /// homogeneous runs move, a run mixing additions and deletions (or
    /// containing edits) stays put. The pass swaps rows in place and never
    /// changes the length or the per-side content of the solution.
    pub fn post_process(&mut self) {
        let mut last_change_start = 0;
        let mut last_change_type = LineSource::Unknown;
        let mut last_line_type = LineSource::FromBoth;

        for i in 0..self.lines.len() {
            let current = self.lines[i].source;

            // the end of a changed region, try to slide it forward
            if current == LineSource::FromBoth
                && current != last_line_type
                && matches!(last_change_type, LineSource::FromA | LineSource::FromB)
            {
                let mut p1 = last_change_start;
                let mut p2 = i;
                loop {
                    let matches = self.lines[p2].source == LineSource::FromBoth
                        && match last_change_type {
                            LineSource::FromA => self.lines[p1].left == self.lines[p2].left,
                            LineSource::FromB => self.lines[p1].right == self.lines[p2].right,
                            _ => unreachable!(),
                        };
                    if !matches {
                        break;
                    }
                    self.lines.swap(p1, p2);
                    p1 += 1;
                    p2 += 1;
                    if p2 >= self.lines.len() {
                        break;
                    }
                }
            }

            // the beginning of a region, update the pointers
            if last_line_type != current {
                last_change_start = i;
                last_change_type = current;
            }
            last_line_type = current;
        }
    }
}
