use num_traits::Float;

use crate::{Point, determinant::Determinant};

/// The turn described by three consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on the same line.
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl<T> From<[&Point<T>; 3]> for Orientation
where
    T: Float,
{
    /// Classifies the given points by the sign of their signed area. Only an area of exactly
    /// zero is collinear.
    fn from(points: [&Point<T>; 3]) -> Self {
        let area = Determinant::from(points).into_inner();

        if area.is_zero() {
            Orientation::Collinear
        } else if area.is_sign_positive() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}
