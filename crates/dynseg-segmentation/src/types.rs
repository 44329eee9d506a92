//! Types used for curve decomposition

use dynseg_core::{Error, PointSequence, Result};
use std::fmt;
use std::ops::Range;

/// One recognised primitive
///
/// Positions are offsets into the underlying sequence. On a cyclic sequence a
/// segment may wrap, in which case `end < start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<S> {
    start: usize,
    end: usize,
    len: usize,
    state: S,
}

impl<S> Segment<S> {
    /// Create a new segment
    pub fn new(start: usize, end: usize, len: usize, state: S) -> Self {
        Self {
            start,
            end,
            len,
            state,
        }
    }

    /// Position of the first point
    pub fn start(&self) -> usize {
        self.start
    }

    /// Position of the last point
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a segment holds at least one point
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the segment holds a single point
    pub fn is_trivial(&self) -> bool {
        self.len == 1
    }

    /// Primitive state recognised over the segment
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Whether the segment wraps past the end of a cyclic sequence
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Positions covered, in order, for a sequence of `sequence_len` points
    pub fn positions(&self, sequence_len: usize) -> impl Iterator<Item = usize> {
        let start = self.start;
        let modulus = sequence_len.max(1);
        (0..self.len).map(move |k| (start + k) % modulus)
    }

    /// Points covered, in order
    pub fn points<'a, P>(&self, sequence: &PointSequence<'a, P>) -> Vec<&'a P> {
        let len = sequence.len();
        self.positions(len)
            .filter_map(|position| sequence.points().get(position))
            .collect()
    }
}

impl<S: fmt::Debug> fmt::Display for Segment<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment {{ start: {}, end: {}, len: {}, state: {:?} }}",
            self.start, self.end, self.len, self.state
        )
    }
}

/// Ordered list of segments covering a sequence
#[derive(Debug, Clone)]
pub struct DecompositionResult<S> {
    segments: Vec<Segment<S>>,
    algorithm: String,
    sequence_len: usize,
    cyclic: bool,
}

impl<S> DecompositionResult<S> {
    /// Create a new decomposition result
    pub fn new(
        segments: Vec<Segment<S>>,
        algorithm: String,
        sequence_len: usize,
        cyclic: bool,
    ) -> Self {
        Self {
            segments,
            algorithm,
            sequence_len,
            cyclic,
        }
    }

    pub fn segments(&self) -> &[Segment<S>] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment<S>> {
        self.segments
    }

    /// Number of segments
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment<S>> {
        self.segments.iter()
    }

    /// Name of the primitive the segments were recognised with
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Number of points of the decomposed sequence
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// Whether the sequence was treated as closed
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Longest segment; the first one on ties
    pub fn longest(&self) -> Option<&Segment<S>> {
        self.segments
            .iter()
            .reduce(|best, s| if s.len > best.len { s } else { best })
    }

    /// Concatenated positions of all segments, a boundary point shared by
    /// two consecutive segments being listed once
    pub fn covered_positions(&self) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for segment in &self.segments {
            let mut positions = segment.positions(self.sequence_len).peekable();
            if out.last().is_some() && out.last() == positions.peek() {
                positions.next();
            }
            out.extend(positions);
        }
        out
    }
}

impl<S> IntoIterator for DecompositionResult<S> {
    type Item = Segment<S>;
    type IntoIter = std::vec::IntoIter<Segment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a DecompositionResult<S> {
    type Item = &'a Segment<S>;
    type IntoIter = std::slice::Iter<'a, Segment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl<S: fmt::Debug> fmt::Display for DecompositionResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decomposition Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sequence length: {}", self.sequence_len)?;
        writeln!(f, "  Cyclic: {}", self.cyclic)?;
        writeln!(f, "  Segments: {}", self.count())?;
        for segment in &self.segments {
            writeln!(f, "    {}", segment)?;
        }
        Ok(())
    }
}

/// How the last segment of a sub-range decomposition is bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndMode {
    /// Never extend past the last point of the range
    #[default]
    Truncate,
    /// May include the single point following the range
    TruncatePlusOne,
    /// Grow as far as the predicate and the sequence allow
    DoNotTruncate,
}

/// Parameters for decompositions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecompositionParameters {
    /// Restrict the decomposition to these positions
    ///
    /// A restricted decomposition is always open, even on a cyclic sequence.
    pub range: Option<Range<usize>>,
    /// Bound on the last segment of a restricted decomposition
    pub end_mode: EndMode,
}

impl DecompositionParameters {
    /// Parameters restricted to `range`
    pub fn with_range(range: Range<usize>, end_mode: EndMode) -> Self {
        Self {
            range: Some(range),
            end_mode,
        }
    }

    /// Resolve the parameters against a concrete sequence
    ///
    /// All offsets of the returned [`Extent`] count steps from its `start`
    /// position.
    pub(crate) fn resolve(&self, sequence_len: usize, cyclic: bool) -> Result<Extent> {
        if sequence_len == 0 {
            return Err(Error::empty_sequence("decomposition"));
        }
        let n = sequence_len;

        let Some(range) = &self.range else {
            return Ok(if cyclic {
                Extent {
                    start: 0,
                    last: n,
                    max_back: n,
                    closed: true,
                }
            } else {
                Extent {
                    start: 0,
                    last: n - 1,
                    max_back: n - 1,
                    closed: false,
                }
            });
        };

        if range.start >= range.end || range.end > n {
            return Err(Error::InvalidParameter(format!(
                "range {}..{} must be non-empty and within a sequence of {} points",
                range.start, range.end, n
            )));
        }

        let last = range.end - range.start - 1;
        let room = if cyclic { n - 1 } else { n - 1 - range.start };
        let max_back = match self.end_mode {
            EndMode::Truncate => last,
            EndMode::TruncatePlusOne => (last + 1).min(room),
            EndMode::DoNotTruncate => room.max(last),
        };

        Ok(Extent {
            start: range.start,
            last,
            max_back,
            closed: false,
        })
    }
}

/// Concrete bounds of one decomposition pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Extent {
    /// Position of the first point
    pub start: usize,
    /// Offset of the last point that must be covered
    pub last: usize,
    /// Offset the back of a window may never pass
    pub max_back: usize,
    /// Whether the pass closes a cyclic sequence on its start point
    pub closed: bool,
}
