//! Greedy decomposition into maximal segments
//!
//! The [`Decomposer`] drives one segment computer across a sequence:
//!
//! 1. start a one-point window at the first point,
//! 2. extend it while the predicate accepts the next point,
//! 3. emit the window as a [`Segment`],
//! 4. restart at the last point of that window, so consecutive segments
//!    share one boundary point, and repeat until the last point is covered.
//!
//! A window that could not grow at all is followed by a window starting at
//! the next point; restarting it in place would never make progress.
//!
//! On a cyclic sequence the pass stops once the back of a window returns to
//! the starting point, or as soon as a single window spans the whole cycle.
//! Every emission after the first covers at least one new point, so `N`
//! points yield at most `N + 1` segments.

use crate::observer::{DecompositionObserver, NullObserver};
use crate::traits::{ConfigurableDecomposition, SegmentComputer};
use crate::types::{DecompositionParameters, DecompositionResult, Extent, Segment};
use crate::IncrementalSegmentComputer;
use dynseg_core::{PointSequence, Result, SegmentPredicate, SequenceCursor, SliceCursor};
use tracing::{debug, instrument};

/// Greedy decomposition driver
pub struct Decomposer<S: SegmentComputer, O = NullObserver> {
    computer: S,
    params: DecompositionParameters,
    observer: O,
}

impl<S: SegmentComputer> Decomposer<S, NullObserver> {
    /// Create a decomposer over the whole sequence
    pub fn new(computer: S) -> Self {
        Self {
            computer,
            params: DecompositionParameters::default(),
            observer: NullObserver,
        }
    }
}

impl<S, O> Decomposer<S, O>
where
    S: SegmentComputer,
    O: DecompositionObserver<S::State>,
{
    /// Replace the observer
    pub fn with_observer<O2: DecompositionObserver<S::State>>(
        self,
        observer: O2,
    ) -> Decomposer<S, O2> {
        Decomposer {
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

    pub fn into_parts(self) -> (S, O) {
        (self.computer, self.observer)
    }

    /// Decompose the sequence starting at `begin`
    ///
    /// A configured range is counted from `begin`. Fails with `InvalidInput`
    /// when `begin` is at end and with `InvalidParameter` for a range that
    /// does not fit the sequence.
    #[instrument(
        skip_all,
        fields(algorithm = self.computer.algorithm_name(), start = begin.position())
    )]
    pub fn decompose(&mut self, begin: S::Cursor) -> Result<DecompositionResult<S::State>> {
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

        debug!(segments = segments.len(), points = n, "greedy decomposition finished");
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
        // Offsets from the starting point
        let mut front = 0usize;
        let mut back = 0usize;

        loop {
            while back < extent.max_back && self.computer.extend_forward()? {
                back += 1;
            }
            emit(&self.computer, &mut self.observer, &mut segments)?;

            if back >= extent.last || (extent.closed && back - front + 1 >= n) {
                break;
            }

            let restart = if back == front {
                back += 1;
                if extent.closed && back >= n {
                    break;
                }
                self.computer.back()?.successor()?
            } else {
                self.computer.back()?.clone()
            };
            front = back;
            if self.observer.is_enabled() {
                self.observer.on_restart(restart.position());
            }
            self.computer.reset(restart)?;
        }

        Ok(segments)
    }
}

impl<'a, P: 'a, S, O> Decomposer<S, O>
where
    S: SegmentComputer<Cursor = SliceCursor<'a, P>>,
    O: DecompositionObserver<S::State>,
{
    /// Decompose a whole [`PointSequence`]
    pub fn decompose_sequence(
        &mut self,
        sequence: &PointSequence<'a, P>,
    ) -> Result<DecompositionResult<S::State>> {
        self.decompose(sequence.begin())
    }
}

impl<S: SegmentComputer, O> ConfigurableDecomposition for Decomposer<S, O> {
    fn parameters(&self) -> &DecompositionParameters {
        &self.params
    }

    fn set_parameters(&mut self, params: DecompositionParameters) {
        self.params = params;
    }
}

/// Snapshot the computer's window, report it and append it to `segments`
pub(crate) fn emit<S, O>(
    computer: &S,
    observer: &mut O,
    segments: &mut Vec<Segment<S::State>>,
) -> Result<()>
where
    S: SegmentComputer,
    O: DecompositionObserver<S::State>,
{
    let segment = computer.segment()?;
    debug!(
        start = segment.start(),
        end = segment.end(),
        len = segment.len(),
        "segment emitted"
    );
    if observer.is_enabled() {
        observer.on_segment(&segment);
    }
    segments.push(segment);
    Ok(())
}

/// Greedily decompose `sequence` with `predicate`
///
/// # Example
///
/// ```rust
/// use dynseg_core::{Point2, PointSequence};
/// use dynseg_segmentation::{greedy_decomposition, predicates::DirectionalRun};
///
/// let points: Vec<Point2> = [(0, 0), (1, 0), (2, 1), (2, 2), (2, 3)]
///     .into_iter()
///     .map(Point2::from)
///     .collect();
/// let result = greedy_decomposition(DirectionalRun, &PointSequence::linear(&points)).unwrap();
///
/// let bounds: Vec<_> = result.iter().map(|s| (s.start(), s.end())).collect();
/// assert_eq!(bounds, vec![(0, 2), (2, 4)]);
/// ```
pub fn greedy_decomposition<'a, P, Pr>(
    predicate: Pr,
    sequence: &PointSequence<'a, P>,
) -> Result<DecompositionResult<Pr::State>>
where
    Pr: SegmentPredicate<P>,
{
    Decomposer::new(IncrementalSegmentComputer::new(predicate)).decompose_sequence(sequence)
}

/// Decompose independent sequences with a shared predicate
///
/// Each sequence gets its own computer. With the `parallel` feature the
/// sequences are processed on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn decompose_batch<'a, P, Pr>(
    predicate: &Pr,
    sequences: &[PointSequence<'a, P>],
    params: &DecompositionParameters,
) -> Result<Vec<DecompositionResult<Pr::State>>>
where
    P: Sync,
    Pr: SegmentPredicate<P> + Sync,
    Pr::State: Send,
{
    use rayon::prelude::*;

    debug!(sequences = sequences.len(), "parallel batch decomposition");
    sequences
        .par_iter()
        .map(|sequence| decompose_one(predicate, sequence, params))
        .collect()
}

/// Decompose independent sequences with a shared predicate
///
/// Each sequence gets its own computer. With the `parallel` feature the
/// sequences are processed on the rayon thread pool.
#[cfg(not(feature = "parallel"))]
pub fn decompose_batch<'a, P, Pr>(
    predicate: &Pr,
    sequences: &[PointSequence<'a, P>],
    params: &DecompositionParameters,
) -> Result<Vec<DecompositionResult<Pr::State>>>
where
    Pr: SegmentPredicate<P>,
{
    sequences
        .iter()
        .map(|sequence| decompose_one(predicate, sequence, params))
        .collect()
}

fn decompose_one<'a, P, Pr>(
    predicate: &Pr,
    sequence: &PointSequence<'a, P>,
    params: &DecompositionParameters,
) -> Result<DecompositionResult<Pr::State>>
where
    Pr: SegmentPredicate<P>,
{
    Decomposer::new(IncrementalSegmentComputer::new(predicate))
        .with_parameters(params.clone())
        .decompose_sequence(sequence)
}
