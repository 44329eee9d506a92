//! Maximal segment cover (tangential cover)
//!
//! Where the greedy [`crate::Decomposer`] restarts from scratch after each
//! segment, the cover slides one dynamic computer along the sequence: after
//! emitting a window that cannot grow, it retracts the window from the front
//! just until the next point becomes admissible, then grows it again. The
//! back of the window never moves backwards, so each point is visited a
//! bounded number of times.
//!
//! For a hereditary predicate (every sub-window of a valid window is valid)
//! each emitted segment is maximal in both directions and the output is the
//! full set of maximal segments of the sequence, in order.

use crate::greedy::emit;
use crate::observer::{DecompositionObserver, NullObserver};
use crate::traits::{ConfigurableDecomposition, DynamicSegmentComputer};
use crate::types::{DecompositionParameters, DecompositionResult, Extent, Segment};
use crate::IncrementalSegmentComputer;
use dynseg_core::{PointSequence, Result, SegmentPredicate, SequenceCursor, SliceCursor};
use tracing::{debug, instrument, trace};

/// Sliding-window enumeration of maximal segments
pub struct MaximalSegmentCover<S: DynamicSegmentComputer, O = NullObserver> {
    computer: S,
    params: DecompositionParameters,
    observer: O,
}

impl<S: DynamicSegmentComputer> MaximalSegmentCover<S, NullObserver> {
    /// Create a cover over the whole sequence
    pub fn new(computer: S) -> Self {
        Self {
            computer,
            params: DecompositionParameters::default(),
            observer: NullObserver,
        }
    }
}

impl<S, O> MaximalSegmentCover<S, O>
where
    S: DynamicSegmentComputer,
    O: DecompositionObserver<S::State>,
{
    /// Replace the observer
    pub fn with_observer<O2: DecompositionObserver<S::State>>(
        self,
        observer: O2,
    ) -> MaximalSegmentCover<S, O2> {
        MaximalSegmentCover {
            computer: self.computer,
            params: self.params,
            observer,
        }
    }

    pub fn computer(&self) -> &S {
        &self.computer
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Enumerate the maximal segments of the sequence starting at `begin`
    ///
    /// On a cyclic sequence the pass ends once the back of the window
    /// returns to the starting point; segments crossing the start are only
    /// maximal forwards.
    #[instrument(
        skip_all,
        fields(algorithm = self.computer.algorithm_name(), start = begin.position())
    )]
    pub fn cover(&mut self, begin: S::Cursor) -> Result<DecompositionResult<S::State>> {
        let n = begin.sequence_len();
        let available = if begin.is_cyclic() {
            n
        } else {
            n.saturating_sub(begin.position())
        };
        let extent = self.params.resolve(available, begin.is_cyclic())?;

        let mut cursor = begin;
        for _ in 0..extent.start {
            cursor.step()?;
        }
        if self.observer.is_enabled() {
            self.observer.on_start(cursor.position(), n, extent.closed);
        }
        self.computer.init(cursor)?;

        let segments = self.run(&extent, n)?;

        debug!(segments = segments.len(), points = n, "maximal segment cover finished");
        if self.observer.is_enabled() {
            self.observer.on_finish(segments.len());
        }
        Ok(DecompositionResult::new(
            segments,
            self.computer.algorithm_name().to_string(),
            n,
            extent.closed,
        ))
    }

    fn run(&mut self, extent: &Extent, n: usize) -> Result<Vec<Segment<S::State>>> {
        let mut segments = Vec::new();
        // Offset of the back of the window from the starting point
        let mut back = 0usize;

        'cover: loop {
            while back < extent.max_back && self.computer.extend_forward()? {
                back += 1;
            }
            emit(&self.computer, &mut self.observer, &mut segments)?;

            if back >= extent.last || (extent.closed && self.computer.size()? >= n) {
                break;
            }

            while !self.computer.is_extendable()? {
                if self.computer.retract_forward()? {
                    let front = self.computer.front()?.position();
                    trace!(front, "front retracted");
                    if self.observer.is_enabled() {
                        self.observer.on_retract(front);
                    }
                    continue;
                }

                // Even a single point cannot be extended: move past it
                back += 1;
                if extent.closed && back >= n {
                    break 'cover;
                }
                let next = self.computer.back()?.successor()?;
                if self.observer.is_enabled() {
                    self.observer.on_restart(next.position());
                }
                self.computer.reset(next)?;
                break;
            }
        }

        Ok(segments)
    }
}

impl<'a, P: 'a, S, O> MaximalSegmentCover<S, O>
where
    S: DynamicSegmentComputer<Cursor = SliceCursor<'a, P>>,
    O: DecompositionObserver<S::State>,
{
    /// Enumerate the maximal segments of a whole [`PointSequence`]
    pub fn cover_sequence(
        &mut self,
        sequence: &PointSequence<'a, P>,
    ) -> Result<DecompositionResult<S::State>> {
        self.cover(sequence.begin())
    }
}

impl<S: DynamicSegmentComputer, O> ConfigurableDecomposition for MaximalSegmentCover<S, O> {
    fn parameters(&self) -> &DecompositionParameters {
        &self.params
    }

    fn set_parameters(&mut self, params: DecompositionParameters) {
        self.params = params;
    }
}

/// Enumerate the maximal segments of `sequence` under `predicate`
pub fn maximal_segments<'a, P, Pr>(
    predicate: Pr,
    sequence: &PointSequence<'a, P>,
) -> Result<DecompositionResult<Pr::State>>
where
    Pr: SegmentPredicate<P>,
{
    MaximalSegmentCover::new(IncrementalSegmentComputer::new(predicate)).cover_sequence(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{AcceptAll, BoundedLength, DirectionalRun, NonDecreasingX};
    use dynseg_core::Point2;

    fn points(coords: &[(i64, i64)]) -> Vec<Point2> {
        coords.iter().map(|&c| c.into()).collect()
    }

    fn bounds<St>(result: &DecompositionResult<St>) -> Vec<(usize, usize)> {
        result.iter().map(|s| (s.start(), s.end())).collect()
    }

    #[test]
    fn test_sliding_windows_of_bounded_length() {
        let data = points(&[(0, 0); 5]);
        let bounded = BoundedLength::new(AcceptAll, 3).unwrap();
        let result = maximal_segments(bounded, &PointSequence::linear(&data)).unwrap();
        assert_eq!(bounds(&result), vec![(0, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn test_overlapping_directional_runs() {
        // E, NE, N, N: maximal runs are {E, NE} and {NE, N, N}
        let data = points(&[(0, 0), (1, 0), (2, 1), (2, 2), (2, 3)]);
        let result = maximal_segments(DirectionalRun, &PointSequence::linear(&data)).unwrap();
        assert_eq!(bounds(&result), vec![(0, 2), (1, 4)]);
    }

    #[test]
    fn test_unextendable_single_point_is_skipped_over() {
        let data = points(&[(2, 0), (1, 0), (3, 0)]);
        let result = maximal_segments(NonDecreasingX, &PointSequence::linear(&data)).unwrap();
        assert_eq!(bounds(&result), vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_cyclic_cover_stops_at_start() {
        let data = points(&[(0, 0); 4]);
        let bounded = BoundedLength::new(AcceptAll, 2).unwrap();
        let result = maximal_segments(bounded, &PointSequence::cyclic(&data)).unwrap();
        assert_eq!(bounds(&result), vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(result.count() <= data.len() + 1);
    }
}
