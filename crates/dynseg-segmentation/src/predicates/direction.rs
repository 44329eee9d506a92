//! Runs of 8-connected steps over at most two adjacent directions
//!
//! Every digital straight segment is an 8-connected path whose steps use at
//! most two Freeman directions, and those two directions are neighbours on
//! the compass. [`DirectionalRun`] checks exactly that necessary condition.
//! It keeps one counter per direction, so both updates are O(1) and undoing
//! a step is exact.

use dynseg_core::{Coordinate, Point2, SegmentPredicate};

/// Freeman code of a unit step, `None` for anything but an 8-neighbour move
fn freeman_code<T: Coordinate>(from: &Point2<T>, to: &Point2<T>) -> Option<usize> {
    if !from.is_adjacent(to) {
        return None;
    }
    let (dx, dy) = from.step_to(to);
    let (zero, one) = (T::zero(), T::one());
    let code = match (dx, dy) {
        (x, y) if x == one && y == zero => 0,
        (x, y) if x == one && y == one => 1,
        (x, y) if x == zero && y == one => 2,
        (x, y) if x == -one && y == one => 3,
        (x, y) if x == -one && y == zero => 4,
        (x, y) if x == -one && y == -one => 5,
        (x, y) if x == zero && y == -one => 6,
        _ => 7,
    };
    Some(code)
}

/// Step histogram of a directional run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionState<T> {
    /// Number of steps per Freeman direction
    pub counts: [usize; 8],
    /// Last point of the run
    pub last: Point2<T>,
    /// Number of points
    pub len: usize,
}

impl<T> DirectionState<T> {
    /// Directions used by at least one step, in increasing code order
    pub fn directions(&self) -> Vec<usize> {
        (0..8).filter(|&code| self.counts[code] > 0).collect()
    }

    fn admits(&self, code: usize) -> bool {
        let mut used = self.directions();
        if !used.contains(&code) {
            used.push(code);
        }
        match used.as_slice() {
            [_] => true,
            [a, b] => (8 + a - b) % 8 == 1 || (8 + b - a) % 8 == 1,
            _ => false,
        }
    }
}

/// Accepts 8-connected windows whose steps use at most two adjacent
/// Freeman directions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalRun;

impl DirectionalRun {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Coordinate> SegmentPredicate<Point2<T>> for DirectionalRun {
    type State = DirectionState<T>;

    fn initial_state(&self, point: &Point2<T>) -> Self::State {
        DirectionState {
            counts: [0; 8],
            last: *point,
            len: 1,
        }
    }

    fn can_extend_front(&self, state: &Self::State, next: &Point2<T>) -> bool {
        freeman_code(&state.last, next).is_some_and(|code| state.admits(code))
    }

    fn apply_extend_front(&self, state: &Self::State, next: &Point2<T>) -> Self::State {
        let mut counts = state.counts;
        if let Some(code) = freeman_code(&state.last, next) {
            counts[code] += 1;
        }
        DirectionState {
            counts,
            last: *next,
            len: state.len + 1,
        }
    }

    fn apply_retract_back(
        &self,
        state: &Self::State,
        removed: &Point2<T>,
        new_front: &Point2<T>,
    ) -> Self::State {
        let mut counts = state.counts;
        if let Some(code) = freeman_code(removed, new_front) {
            counts[code] -= 1;
        }
        DirectionState {
            counts,
            last: state.last,
            len: state.len - 1,
        }
    }

    fn name(&self) -> &'static str {
        "DirectionalRun"
    }
}
