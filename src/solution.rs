use std::fmt;

/// The origin of a single [`Line`] in a [`Solution`].
///
/// The tag is the sole discriminator formatters dispatch on: a line either
/// exists only in the pre-image, only in the post-image, or on both sides
/// (identical or edited). On the wire the tag is a single character, see
/// [`LineSource::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineSource {
    /// Uninitialized sentinel. Never emitted into a solution; it only lives in
    /// the aligner's back-pointer table to mark unresolved cells.
    #[default]
    Unknown,
    /// Line is only present in the pre-image (a deletion).
    FromA,
    /// Line is only present in the post-image (an addition).
    FromB,
    /// Line is present on both sides. The two panes are usually identical;
    /// they may still differ in surrounding whitespace when the engine was
    /// asked to ignore it.
    FromBoth,
    /// Line is present on both sides but its content changed.
    FromBothEdit,
}

impl LineSource {
    /// Stable single-character form used by the text and HTML formatters:
    /// `<`, `>`, `=`, `~` and the empty string for [`LineSource::Unknown`].
    pub fn as_str(self) -> &'static str {
        match self {
            LineSource::Unknown => "",
            LineSource::FromA => "<",
            LineSource::FromB => ">",
            LineSource::FromBoth => "=",
            LineSource::FromBothEdit => "~",
        }
    }
}

impl fmt::Display for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of a side-by-side diff.
///
/// `left` holds the pre-image pane and `right` the post-image pane. The empty
/// string stands in for the absent side of a one-sided line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Content shown on the pre-image side, `""` for additions.
    pub left: &'a str,
    /// Content shown on the post-image side, `""` for deletions.
    pub right: &'a str,
    /// Which side(s) this row originates from.
    pub source: LineSource,
}

/// An ordered, line-aligned diff between two texts.
///
/// A solution is append-only while it is built; the only mutations allowed
/// afterwards are concatenating another solution and the
/// [`post_process`](Solution::post_process) shift, which reorders rows but
/// never changes the length or the per-side content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution<'a> {
    pub(crate) lines: Vec<Line<'a>>,
}

impl<'a> Solution<'a> {
    /// Creates an empty solution.
    pub fn new() -> Solution<'a> {
        Solution::default()
    }

    /// The rows of the diff in order. Random access so formatters can look
    /// ahead, for example to compute the distance to the next change.
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the solution contains no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends a row with explicit panes and tag.
    pub fn push(&mut self, left: &'a str, right: &'a str, source: LineSource) {
        self.lines.push(Line {
            left,
            right,
            source,
        });
    }

    /// Appends a pre-image only row (a deletion).
    pub fn push_a(&mut self, left: &'a str) {
        self.push(left, "", LineSource::FromA);
    }

    /// Appends a post-image only row (an addition).
    pub fn push_b(&mut self, right: &'a str) {
        self.push("", right, LineSource::FromB);
    }

    /// Appends all rows of `other`, preserving their order.
    pub fn append(&mut self, other: Solution<'a>) {
        self.lines.extend(other.lines);
    }
}

impl<'s, 'a> IntoIterator for &'s Solution<'a> {
    type Item = &'s Line<'a>;
    type IntoIter = std::slice::Iter<'s, Line<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
