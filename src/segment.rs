use std::cmp::{self, Ordering};

use num_traits::Float;

use crate::{IndexedPoint, Orientation, Point, determinant::Determinant};

/// The straight line between two consecutive vertices of a polygon.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a, T> {
    /// The first point in the segment.
    pub from: &'a IndexedPoint<T>,
    /// The last point in the segment.
    pub to: &'a IndexedPoint<T>,
}

impl<'a, T> Segment<'a, T> {
    pub fn new(from: &'a IndexedPoint<T>, to: &'a IndexedPoint<T>) -> Self {
        Self { from, to }
    }

    /// Returns the coordinates of both endpoints, in order.
    pub fn endpoints(&self) -> [&'a Point<T>; 2] {
        [&self.from.point, &self.to.point]
    }

    /// Returns true if, and only if, this is the edge going from the last vertex of the polygon
    /// back to the first one.
    pub fn is_closing(&self) -> bool {
        self.to.index == 0 && self.from.index != 0
    }

    /// Returns the index at which this segment starts when walking the polygon forwards.
    ///
    /// Only the closing edge is special-cased. The edge leaving vertex 0 is a regular one and
    /// starts at `0`: treating it as wrapping too would make the reversal range of a crossing
    /// on it replace the closing edge instead.
    pub fn start_index(&self) -> usize {
        if self.is_closing() {
            return self.from.index;
        }

        self.from.index.min(self.to.index)
    }

    /// Returns the index at which this segment ends when walking the polygon forwards.
    ///
    /// That is `0` for the closing edge, and the greatest index for any other, including the edge
    /// leaving vertex 0.
    pub fn end_index(&self) -> usize {
        if self.is_closing() {
            return 0;
        }

        self.from.index.max(self.to.index)
    }
}

impl<T> Segment<'_, T>
where
    T: Float,
{
    /// Returns true if, and only if, self and rhs share at least one point, including touching
    /// endpoints and collinear overlaps.
    pub fn crosses(&self, rhs: &Self) -> bool {
        let [p1, q1] = self.endpoints();
        let [p2, q2] = rhs.endpoints();

        let o1 = Orientation::from([p1, q1, p2]);
        let o2 = Orientation::from([p1, q1, q2]);
        let o3 = Orientation::from([p2, q2, p1]);
        let o4 = Orientation::from([p2, q2, q1]);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && p2.is_within(p1, q1))
            || (o2 == Orientation::Collinear && q2.is_within(p1, q1))
            || (o3 == Orientation::Collinear && p1.is_within(p2, q2))
            || (o4 == Orientation::Collinear && q1.is_within(p2, q2))
    }

    /// Returns true if, and only if, the lines through self and rhs are parallel or coincident.
    pub fn is_parallel(&self, rhs: &Self) -> bool {
        Determinant::new(self, rhs).into_inner().is_zero()
    }

    /// Returns the point at which the lines through self and rhs meet, if they are not parallel
    /// and the point belongs to both segments.
    pub fn intersection(&self, rhs: &Self) -> Option<Point<T>> {
        let denominator = Determinant::new(self, rhs).into_inner();
        if denominator.is_zero() {
            return None;
        }

        let [p1, q1] = self.endpoints();
        let [p2, q2] = rhs.endpoints();

        let ua = ((q2.x - p2.x) * (p1.y - p2.y) - (q2.y - p2.y) * (p1.x - p2.x)) / denominator;
        let ub = ((q1.x - p1.x) * (p1.y - p2.y) - (q1.y - p1.y) * (p1.x - p2.x)) / denominator;

        let unit = T::zero()..=T::one();
        if !unit.contains(&ua) || !unit.contains(&ub) {
            return None;
        }

        Some(Point {
            x: p1.x + ua * (q1.x - p1.x),
            y: p1.y + ua * (q1.y - p1.y),
        })
    }

    /// Being self and rhs collinear, returns the middle point of the span they have in common,
    /// if any.
    pub fn overlap_midpoint(&self, rhs: &Self) -> Option<Point<T>> {
        let [lo, hi] = self.sorted_endpoints();
        let [rhs_lo, rhs_hi] = rhs.sorted_endpoints();

        let start = cmp::max_by(lo, rhs_lo, |a, b| lexicographic(*a, *b));
        let end = cmp::min_by(hi, rhs_hi, |a, b| lexicographic(*a, *b));

        (lexicographic(start, end) != Ordering::Greater).then(|| start.midpoint(end))
    }

    fn sorted_endpoints(&self) -> [&Point<T>; 2] {
        let [from, to] = self.endpoints();
        if lexicographic(from, to) == Ordering::Greater {
            [to, from]
        } else {
            [from, to]
        }
    }
}

/// Orders points by their horizontal coordinate first, and by the vertical one on ties.
fn lexicographic<T: Float>(a: &Point<T>, b: &Point<T>) -> Ordering {
    match a.x.partial_cmp(&b.x) {
        Some(Ordering::Equal) => a.y.partial_cmp(&b.y),
        other => other,
    }
    .unwrap_or(Ordering::Equal)
}
