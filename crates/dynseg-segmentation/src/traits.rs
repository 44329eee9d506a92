//! Core traits for segment computers and decompositions
//!
//! Following the layered architecture:
//! - Layer 3: Decompositions driving a computer across a sequence
//!   ([`crate::Decomposer`], [`crate::MaximalSegmentCover`])
//! - Layer 2: Segment computers maintaining a window and its primitive
//!   (this module, implemented by [`crate::IncrementalSegmentComputer`])
//! - Layer 1: Cursors and predicates (from dynseg-core)
//!
//! The computer traits form a refinement chain: a [`SegmentComputer`] can
//! only grow its window forward, a [`DynamicSegmentComputer`] can also
//! retract it from the other end.

use crate::types::{DecompositionParameters, Segment};
use dynseg_core::{Result, SequenceCursor};

/// Forward-only segment computer
///
/// Tracks a non-empty window of consecutive points `[front, back]` together
/// with the state of the primitive recognised over it. All accessors and
/// mutators fail with `PreconditionViolation` until [`init`](Self::init) has
/// been called.
pub trait SegmentComputer {
    /// Cursor type over the underlying sequence
    type Cursor: SequenceCursor;
    /// Primitive state maintained over the window
    type State: Clone + PartialEq + std::fmt::Debug;

    /// Name of the recognised primitive, for logs and results
    fn algorithm_name(&self) -> &'static str;

    /// Start a one-point window at `cursor`
    ///
    /// Fails with `InvalidInput` if `cursor` is at end; the computer is left
    /// untouched in that case.
    fn init(&mut self, cursor: Self::Cursor) -> Result<()>;

    /// Discard the current window and start again at `cursor`
    fn reset(&mut self, cursor: Self::Cursor) -> Result<()> {
        self.init(cursor)
    }

    /// Whether a window is currently held
    fn is_initialized(&self) -> bool;

    /// Whether the sequence holds a point after the back of the window
    fn has_next(&self) -> Result<bool> {
        Ok(self.back()?.has_successor())
    }

    /// Whether the point after the back of the window may be appended
    ///
    /// Fails with `PreconditionViolation` when no such point exists.
    fn is_extendable(&self) -> Result<bool>;

    /// Append the next point if the predicate accepts it
    ///
    /// Returns `false`, leaving window and state unchanged, when it does not.
    fn extend_forward(&mut self) -> Result<bool>;

    /// Cursor on the first point of the window
    fn front(&self) -> Result<&Self::Cursor>;

    /// Cursor on the last point of the window
    fn back(&self) -> Result<&Self::Cursor>;

    /// Number of points in the window
    fn size(&self) -> Result<usize>;

    /// Primitive state of the current window
    fn primitive_state(&self) -> Result<&Self::State>;

    /// First point of the window
    fn front_point(&self) -> Result<&<Self::Cursor as SequenceCursor>::Point> {
        self.front()?
            .point()
            .ok_or_else(|| {
                dynseg_core::Error::PreconditionViolation("front cursor is at end".into())
            })
    }

    /// Last point of the window
    fn back_point(&self) -> Result<&<Self::Cursor as SequenceCursor>::Point> {
        self.back()?
            .point()
            .ok_or_else(|| {
                dynseg_core::Error::PreconditionViolation("back cursor is at end".into())
            })
    }

    /// Snapshot of the current window as a [`Segment`]
    fn segment(&self) -> Result<Segment<Self::State>> {
        Ok(Segment::new(
            self.front()?.position(),
            self.back()?.position(),
            self.size()?,
            self.primitive_state()?.clone(),
        ))
    }
}

/// Segment computer that can also shrink its window
pub trait DynamicSegmentComputer: SegmentComputer {
    /// Drop the first point of the window
    ///
    /// Returns `false`, leaving window and state unchanged, when the window
    /// holds a single point.
    fn retract_forward(&mut self) -> Result<bool>;
}

/// Decompositions with adjustable parameters
pub trait ConfigurableDecomposition {
    fn parameters(&self) -> &DecompositionParameters;
    fn set_parameters(&mut self, params: DecompositionParameters);

    fn with_parameters(mut self, params: DecompositionParameters) -> Self
    where
        Self: Sized,
    {
        self.set_parameters(params);
        self
    }
}
