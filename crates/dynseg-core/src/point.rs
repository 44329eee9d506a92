//! Discrete point types
//!
//! The engine itself never looks inside points; only predicates do. This
//! module provides the integer point type used by the bundled predicates
//! together with a small coordinate trait, in the same spirit as a numeric
//! trait hierarchy: pure type constraints, no computational layer.

use num_traits::{PrimInt, Signed};
use std::fmt::{self, Debug, Display};

/// Coordinate type of a discrete point
///
/// Blanket-implemented for the signed primitive integers.
pub trait Coordinate: PrimInt + Signed + Debug + Send + Sync + 'static {}

impl<T> Coordinate for T where T: PrimInt + Signed + Debug + Send + Sync + 'static {}

/// A point of the digital plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2<T = i64> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    /// Create a new point
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coordinate> Point2<T> {
    /// Sign of the displacement from `self` to `other`, per axis
    ///
    /// Each component is `-1`, `0` or `1`.
    pub fn step_to(&self, other: &Self) -> (T, T) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }

    /// Whether `other` is one of the eight neighbours of `self`
    pub fn is_adjacent(&self, other: &Self) -> bool {
        let dx = (other.x - self.x).abs();
        let dy = (other.y - self.y).abs();
        self != other && dx <= T::one() && dy <= T::one()
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Display> Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
