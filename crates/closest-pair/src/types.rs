//! Core value types for the planar closest-pair solver.
//!
//! - `Point`: alias for `nalgebra::Vector2<f64>`; points are immutable value
//!   data, and equal coordinates mean interchangeable points.
//! - `ClosestPair`: a found pair plus its distance.
//! - `InputError`: boundary validation failures (non-finite coordinates).

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane with finite coordinates.
pub type Point = Vector2<f64>;

/// Euclidean distance between two points. Exactly 0 for coincident points.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// The closest pair found in a point set, with its distance.
///
/// Absence of a pair (fewer than two points considered) is expressed as
/// `Option<ClosestPair>::None` by the solvers; it is not an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub a: Point,
    pub b: Point,
    pub dist: f64,
}

/// Input validation errors surfaced by the top-level solver.
///
/// Validation happens once at the entry boundary; non-finite values must not
/// reach the recursive comparisons, where they would corrupt ordering and
/// the strip pruning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputError {
    /// A coordinate is NaN or infinite; `index` is the first offending point.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCoordinate { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_three_four_five() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_coincident_is_zero() {
        assert_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn distance_axis_aligned() {
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(5.0, 0.0)), 5.0);
        assert_eq!(distance(Point::new(0.0, 0.0), Point::new(0.0, 5.0)), 5.0);
    }
}
