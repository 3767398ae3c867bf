//! Detection and removal of self-crossings in closed polygons.
//!
//! A [`Polygon`] is an ordered sequence of points whose last vertex connects back to the first
//! one. [`detect`] finds every pair of non-adjacent edges crossing each other, while
//! [`untangle`] reorders the vertices until no crossing is left.
//!
//! ```
//! use uncross::{Polygon, detect, untangle};
//!
//! let polygon: Polygon<f64> = vec![[0., 0.], [10., 10.], [10., 0.], [0., 10.]].into();
//! assert_eq!(detect(&polygon).len(), 1);
//!
//! let polygon = untangle(polygon, false).unwrap();
//! assert!(detect(&polygon).is_empty());
//! ```

mod detector;
mod determinant;
mod error;
mod orientation;
mod point;
mod polygon;
mod segment;
mod untangler;

use num_traits::Float;

pub use self::detector::{CollinearPolicy, Detector, Intersection};
pub use self::error::Error;
pub use self::orientation::Orientation;
pub use self::point::{IndexedPoint, Point};
pub use self::polygon::Polygon;
pub use self::segment::Segment;
pub use self::untangler::Untangler;

/// Returns every crossing between non-adjacent edges of the given polygon.
pub fn detect<T>(polygon: &Polygon<T>) -> Vec<Intersection<'_, T>>
where
    T: Float,
{
    Detector::default().find_intersections(polygon)
}

/// Returns the given polygon with its crossings removed, or with a single one removed if
/// `fix_only_one` is set.
pub fn untangle<T>(polygon: Polygon<T>, fix_only_one: bool) -> Result<Polygon<T>, Error<T>>
where
    T: Float,
{
    Untangler::default()
        .with_fix_only_one(fix_only_one)
        .execute(polygon)
}
