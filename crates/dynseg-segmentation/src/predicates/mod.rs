//! Reference predicates
//!
//! Small, exact predicates used by the tests, examples and benchmarks. Real
//! recognisers (arithmetical straightness, circular arcs) plug in through the
//! same [`SegmentPredicate`] contract.

pub mod bounded;
pub mod direction;
pub mod monotone;

pub use bounded::{BoundedLength, BoundedState};
pub use direction::{DirectionState, DirectionalRun};
pub use monotone::{NonDecreasingX, XRunState};

use dynseg_core::SegmentPredicate;

/// Accepts every window; the state is the number of points
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcceptAll;

impl<P> SegmentPredicate<P> for AcceptAll {
    type State = usize;

    fn initial_state(&self, _point: &P) -> usize {
        1
    }

    fn can_extend_front(&self, _state: &usize, _next: &P) -> bool {
        true
    }

    fn apply_extend_front(&self, state: &usize, _next: &P) -> usize {
        state + 1
    }

    fn apply_retract_back(&self, state: &usize, _removed: &P, _new_front: &P) -> usize {
        state - 1
    }

    fn name(&self) -> &'static str {
        "AcceptAll"
    }
}
