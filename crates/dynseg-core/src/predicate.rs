//! Pluggable validity predicates
//!
//! A [`SegmentPredicate`] decides whether a window of consecutive points forms
//! a valid primitive and summarises that primitive in an explicit
//! [`SegmentPredicate::State`] value. The segment computers never inspect the
//! state; they only thread it through the predicate's pure functions.
//!
//! # Contract
//!
//! - `initial_state(p)` is the canonical state of the one-point window `[p]`.
//!   A single point is always a valid window.
//! - `can_extend_front(s, q)` is a pure query: may `q` be appended after the
//!   last point of the window summarised by `s`?
//! - `apply_extend_front(s, q)` is only called when `can_extend_front(s, q)`
//!   holds, and at most once per actual extension.
//! - `apply_retract_back(s, removed, new_front)` returns the state of the
//!   window without its first point `removed`; `new_front` is the point that
//!   becomes first. It is never called on a one-point window. The result must
//!   be exactly the state the window would have had if `removed` had never
//!   been included.
//! - Both `apply_*` functions must run in amortized O(1) in the window size.
//!
//! The naming follows the direction of the underlying sequence: the window
//! grows at its *front* in the direction of travel (its last point) and is
//! retracted at its *back* (its first point).

use std::fmt::Debug;

/// Incremental, exactly reversible validity test over point windows
///
/// # Example
///
/// ```rust
/// use dynseg_core::SegmentPredicate;
///
/// /// Windows whose values never decrease
/// struct Ascending;
///
/// impl SegmentPredicate<i32> for Ascending {
///     // (last value, number of values)
///     type State = (i32, usize);
///
///     fn initial_state(&self, point: &i32) -> Self::State {
///         (*point, 1)
///     }
///     fn can_extend_front(&self, state: &Self::State, next: &i32) -> bool {
///         *next >= state.0
///     }
///     fn apply_extend_front(&self, state: &Self::State, next: &i32) -> Self::State {
///         (*next, state.1 + 1)
///     }
///     fn apply_retract_back(&self, state: &Self::State, _: &i32, _: &i32) -> Self::State {
///         (state.0, state.1 - 1)
///     }
///     fn name(&self) -> &'static str {
///         "Ascending"
///     }
/// }
///
/// assert_eq!(Ascending.evaluate(&[1, 2, 2, 5]), Some((5, 4)));
/// assert_eq!(Ascending.evaluate(&[1, 3, 2]), None);
/// ```
pub trait SegmentPredicate<P> {
    /// Summary of the primitive recognised over the current window
    type State: Clone + PartialEq + Debug;

    /// State of the one-point window `[point]`
    fn initial_state(&self, point: &P) -> Self::State;

    /// Whether `next` may be appended after the window summarised by `state`
    fn can_extend_front(&self, state: &Self::State, next: &P) -> bool;

    /// State of the window extended by `next`
    fn apply_extend_front(&self, state: &Self::State, next: &P) -> Self::State;

    /// State of the window without its first point `removed`
    fn apply_retract_back(&self, state: &Self::State, removed: &P, new_front: &P) -> Self::State;

    /// Human-readable name of the predicate
    fn name(&self) -> &'static str;

    /// Recompute the state of `points` from scratch
    ///
    /// Returns `None` for an empty slice or when some point is rejected.
    fn evaluate(&self, points: &[P]) -> Option<Self::State> {
        let (first, rest) = points.split_first()?;
        let mut state = self.initial_state(first);
        for point in rest {
            if !self.can_extend_front(&state, point) {
                return None;
            }
            state = self.apply_extend_front(&state, point);
        }
        Some(state)
    }
}

impl<P, T: SegmentPredicate<P> + ?Sized> SegmentPredicate<P> for &T {
    type State = T::State;

    fn initial_state(&self, point: &P) -> Self::State {
        (**self).initial_state(point)
    }

    fn can_extend_front(&self, state: &Self::State, next: &P) -> bool {
        (**self).can_extend_front(state, next)
    }

    fn apply_extend_front(&self, state: &Self::State, next: &P) -> Self::State {
        (**self).apply_extend_front(state, next)
    }

    fn apply_retract_back(&self, state: &Self::State, removed: &P, new_front: &P) -> Self::State {
        (**self).apply_retract_back(state, removed, new_front)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts points; accepts anything
    struct Count;

    impl SegmentPredicate<u8> for Count {
        type State = usize;

        fn initial_state(&self, _: &u8) -> usize {
            1
        }
        fn can_extend_front(&self, _: &usize, _: &u8) -> bool {
            true
        }
        fn apply_extend_front(&self, state: &usize, _: &u8) -> usize {
            state + 1
        }
        fn apply_retract_back(&self, state: &usize, _: &u8, _: &u8) -> usize {
            state - 1
        }
        fn name(&self) -> &'static str {
            "Count"
        }
    }

    #[test]
    fn test_evaluate_folds_extensions() {
        assert_eq!(Count.evaluate(&[1, 2, 3]), Some(3));
        assert_eq!(Count.evaluate(&[]), None);
    }

    #[test]
    fn test_reference_forwards() {
        let by_ref = &Count;
        assert_eq!(by_ref.name(), "Count");
        assert_eq!(by_ref.evaluate(&[7]), Some(1));
    }
}
