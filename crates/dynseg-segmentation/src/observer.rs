//! Observation hooks for decomposition passes
//!
//! Decomposers report their progress through a [`DecompositionObserver`]
//! without depending on any rendering or recording backend. The default
//! [`NullObserver`] compiles down to nothing.

use crate::types::Segment;

/// Hooks invoked at key points of a decomposition pass
///
/// All methods default to no-ops so implementations only override what they
/// need.
pub trait DecompositionObserver<S> {
    /// A pass starts at `start` over a sequence of `sequence_len` points
    fn on_start(&mut self, _start: usize, _sequence_len: usize, _cyclic: bool) {}

    /// A segment has been emitted
    fn on_segment(&mut self, _segment: &Segment<S>) {}

    /// The computer has been reset at `position`
    fn on_restart(&mut self, _position: usize) {}

    /// The front of a window has been retracted to `position`
    fn on_retract(&mut self, _position: usize) {}

    /// The pass finished after emitting `segment_count` segments
    fn on_finish(&mut self, _segment_count: usize) {}

    /// Check if this observer is active
    ///
    /// Decomposers skip every hook of a disabled observer.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Observer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullObserver;

impl<S> DecompositionObserver<S> for NullObserver {
    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

impl<S, O: DecompositionObserver<S> + ?Sized> DecompositionObserver<S> for &mut O {
    fn on_start(&mut self, start: usize, sequence_len: usize, cyclic: bool) {
        (**self).on_start(start, sequence_len, cyclic)
    }

    fn on_segment(&mut self, segment: &Segment<S>) {
        (**self).on_segment(segment)
    }

    fn on_restart(&mut self, position: usize) {
        (**self).on_restart(position)
    }

    fn on_retract(&mut self, position: usize) {
        (**self).on_retract(position)
    }

    fn on_finish(&mut self, segment_count: usize) {
        (**self).on_finish(segment_count)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}
