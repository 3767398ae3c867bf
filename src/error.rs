use thiserror::Error;

use crate::Polygon;

/// Errors raised while editing or untangling a [`Polygon`].
#[derive(Debug, Error)]
pub enum Error<T> {
    #[error("position {position} is out of bounds for a polygon of {len} vertices")]
    OutOfBounds { position: usize, len: usize },

    /// The iteration budget ran out before every crossing was removed. The polygon is the
    /// partially untangled one, as it was when the budget ran out.
    #[error("{crossings} crossing(s) left after {iterations} reversal(s)")]
    NotConverged {
        iterations: usize,
        crossings: usize,
        polygon: Polygon<T>,
    },
}
