use log::trace;
use num_traits::Float;

use crate::{Point, Polygon, Segment};

/// How to report a crossing between two collinear segments, for which the lines through them
/// meet at no single point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Reports the crossing at the middle of the span both segments have in common.
    #[default]
    Midpoint,
    /// Leaves the crossing out of the result.
    Skip,
}

/// Two non-adjacent edges of a polygon crossing each other.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a, T> {
    /// The edge found first when walking the polygon.
    pub first: Segment<'a, T>,
    pub second: Segment<'a, T>,
    /// Where both edges meet.
    pub point: Point<T>,
}

impl<T> Intersection<'_, T> {
    /// Returns the cyclic range of vertices, from the end of the first edge to the start of the
    /// second one, whose reversal removes this crossing.
    ///
    /// Swapping the edges yields the complementary range, which removes the crossing as well.
    pub fn reversal_range(&self) -> (usize, usize) {
        (self.first.end_index(), self.second.start_index())
    }
}

/// Finds every pair of non-adjacent edges of a polygon that cross each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct Detector {
    collinear: CollinearPolicy,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how crossings between collinear edges are reported.
    pub fn with_collinear_policy(mut self, policy: CollinearPolicy) -> Self {
        self.collinear = policy;
        self
    }

    /// Returns all the crossings of the given polygon.
    ///
    /// Edges are tested pairwise, so the crossings come ordered by the position of their first
    /// edge and then by the position of the second one.
    pub fn find_intersections<'a, T>(&self, polygon: &'a Polygon<T>) -> Vec<Intersection<'a, T>>
    where
        T: Float,
    {
        // Any polygon with less than four vertices has no pair of non-adjacent edges.
        if polygon.len() < 4 {
            return Vec::new();
        }

        let segments: Vec<_> = polygon.edges().collect();
        let last = segments.len() - 1;

        let intersections: Vec<_> = (0..segments.len())
            .flat_map(|i| (i + 2..segments.len()).map(move |j| (i, j)))
            // The first and last edges are adjacent through the very first vertex.
            .filter(|&pair| pair != (0, last))
            .filter_map(|(i, j)| self.intersection(segments[i], segments[j]))
            .collect();

        trace!(
            "found {} crossing(s) in a polygon of {} vertices",
            intersections.len(),
            polygon.len()
        );

        intersections
    }

    fn intersection<'a, T>(
        &self,
        first: Segment<'a, T>,
        second: Segment<'a, T>,
    ) -> Option<Intersection<'a, T>>
    where
        T: Float,
    {
        if !first.crosses(&second) {
            return None;
        }

        let point = if first.is_parallel(&second) {
            match self.collinear {
                CollinearPolicy::Midpoint => first.overlap_midpoint(&second),
                CollinearPolicy::Skip => None,
            }
        } else {
            first.intersection(&second)
        }?;

        Some(Intersection {
            first,
            second,
            point,
        })
    }
}
