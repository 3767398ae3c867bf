use num_traits::Float;

/// A point in the plain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point<T> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the point halfway between self and rhs.
    pub fn midpoint(&self, rhs: &Self) -> Self {
        let two = T::one() + T::one();
        Self {
            x: (self.x + rhs.x) / two,
            y: (self.y + rhs.y) / two,
        }
    }

    /// Returns true if, and only if, self lies inside the axis-aligned bounding box of the
    /// given corners, borders included.
    pub fn is_within(&self, a: &Self, b: &Self) -> bool {
        self.x <= a.x.max(b.x)
            && self.x >= a.x.min(b.x)
            && self.y <= a.y.max(b.y)
            && self.y >= a.y.min(b.y)
    }
}

/// A [`Point`] that knows its position in the cyclic order of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint<T> {
    /// The position of the point in the polygon it belongs to.
    pub index: usize,
    /// The coordinates of the point.
    pub point: Point<T>,
}

impl<T> IndexedPoint<T> {
    pub fn new(index: usize, point: impl Into<Point<T>>) -> Self {
        Self {
            index,
            point: point.into(),
        }
    }
}

/// A constructor macro for [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::Point { x: $x, y: $y }
    };
}
