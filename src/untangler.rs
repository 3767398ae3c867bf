use log::{debug, warn};
use num_traits::Float;

use crate::{Detector, Error, Intersection, Polygon};

/// Removes the self-crossings of a polygon by reversing the chain of vertices between two
/// crossing edges, one crossing at a time, until none is left.
///
/// The resulting polygon has the very same vertices, in a different order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untangler {
    detector: Detector,
    max_iterations: Option<usize>,
    fix_only_one: bool,
}

impl Untangler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the detector used to find the crossings.
    pub fn with_detector(mut self, detector: Detector) -> Self {
        self.detector = detector;
        self
    }

    /// Sets the maximum amount of reversals to perform before giving up.
    ///
    /// Defaults to the square of the amount of vertices.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// If set, the untangler stops right after removing the first crossing found.
    pub fn with_fix_only_one(mut self, fix_only_one: bool) -> Self {
        self.fix_only_one = fix_only_one;
        self
    }

    /// Returns the given polygon with its crossings removed.
    pub fn execute<T>(&self, mut polygon: Polygon<T>) -> Result<Polygon<T>, Error<T>>
    where
        T: Float,
    {
        let max_iterations = self
            .max_iterations
            .unwrap_or_else(|| polygon.len().saturating_mul(polygon.len()).max(1));

        let mut iterations = 0;
        loop {
            let (crossings, range) = {
                let intersections = self.detector.find_intersections(&polygon);
                (
                    intersections.len(),
                    intersections.first().map(Intersection::reversal_range),
                )
            };

            let Some((start, end)) = range else {
                debug!("polygon untangled after {iterations} reversal(s)");
                return Ok(polygon);
            };

            if iterations >= max_iterations {
                warn!("giving up with {crossings} crossing(s) left after {iterations} reversal(s)");
                return Err(Error::NotConverged {
                    iterations,
                    crossings,
                    polygon,
                });
            }

            debug!("reversing vertices from {start} to {end} ({crossings} crossing(s) found)");
            polygon.reverse_between(start, end)?;
            iterations += 1;

            if self.fix_only_one {
                return Ok(polygon);
            }
        }
    }
}
