//! Monotone runs along the x axis

use dynseg_core::{Coordinate, Point2, SegmentPredicate};

/// State of a run of non-decreasing x coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XRunState<T> {
    /// x coordinate of the first point
    pub first_x: T,
    /// x coordinate of the last point
    pub last_x: T,
    /// Number of points
    pub len: usize,
}

impl<T: Coordinate> XRunState<T> {
    /// Horizontal extent of the run
    pub fn width(&self) -> T {
        self.last_x - self.first_x
    }
}

/// Accepts windows whose x coordinates never decrease
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NonDecreasingX;

impl NonDecreasingX {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Coordinate> SegmentPredicate<Point2<T>> for NonDecreasingX {
    type State = XRunState<T>;

    fn initial_state(&self, point: &Point2<T>) -> Self::State {
        XRunState {
            first_x: point.x,
            last_x: point.x,
            len: 1,
        }
    }

    fn can_extend_front(&self, state: &Self::State, next: &Point2<T>) -> bool {
        next.x >= state.last_x
    }

    fn apply_extend_front(&self, state: &Self::State, next: &Point2<T>) -> Self::State {
        XRunState {
            last_x: next.x,
            len: state.len + 1,
            ..*state
        }
    }

    fn apply_retract_back(
        &self,
        state: &Self::State,
        _removed: &Point2<T>,
        new_front: &Point2<T>,
    ) -> Self::State {
        XRunState {
            first_x: new_front.x,
            len: state.len - 1,
            ..*state
        }
    }

    fn name(&self) -> &'static str {
        "NonDecreasingX"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_x_is_accepted() {
        let pts = [Point2::new(1i32, 0), Point2::new(1, 4), Point2::new(3, -2)];
        let state = NonDecreasingX.evaluate(&pts).unwrap();
        assert_eq!(state.len, 3);
        assert_eq!(state.width(), 2);
    }

    #[test]
    fn test_decrease_is_rejected() {
        let pts = [Point2::new(0i64, 0), Point2::new(2, 0), Point2::new(1, 0)];
        assert!(NonDecreasingX.evaluate(&pts).is_none());
    }

    #[test]
    fn test_retract_matches_recomputation() {
        let pts = [Point2::new(0i64, 0), Point2::new(2, 1), Point2::new(5, 1)];
        let full = NonDecreasingX.evaluate(&pts).unwrap();
        let retracted = NonDecreasingX.apply_retract_back(&full, &pts[0], &pts[1]);
        assert_eq!(Some(retracted), NonDecreasingX.evaluate(&pts[1..]));
    }
}
