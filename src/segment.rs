//! The segment-distance exercise: the minimum Euclidean distance from a
//! point to a bounded line segment in 3D space.
//!
//! The segment is the closed set of points between two endpoints `a` and `b`,
//! endpoints included. Where the query point projects onto the carrying line
//! decides the answer: short of `a` the closest point is `a` itself, past `b`
//! it is `b`, and in between it is the foot of the perpendicular.
//!
//! # Examples
//!
//! ```
//! use exercises::segment::{distance, Point3};
//!
//! let a = Point3::new(0.0, 0.0, 0.0);
//! let b = Point3::new(2.0, 0.0, 0.0);
//!
//! // The perpendicular from (1, 1, 0) lands midway between the endpoints.
//! assert_eq!(distance(&a, &b, &Point3::new(1.0, 1.0, 0.0)), 1.0);
//! ```

/// A position in 3D space, double precision.
pub type Point3 = nalgebra::Point3<f64>;

/// A displacement between two [`Point3`]s.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Computes the distance from point `p` to the segment with endpoints `a`
/// and `b`.
///
/// The result is never negative and is zero exactly when `p` lies on the
/// segment. A zero-length segment needs no special handling: with `a == b`
/// the first projection test already reports `p` at or behind `a`, and the
/// distance to `a` is the answer.
///
/// Coordinates are assumed finite; NaN or infinite inputs propagate through
/// the arithmetic untouched.
///
/// # Examples
///
/// ```
/// use exercises::segment::{distance, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(1.0, 0.0, 0.0);
///
/// // Beyond `b`, the distance is measured to `b` itself.
/// assert_eq!(distance(&a, &b, &Point3::new(1.0, 1.0, 0.0)), 1.0);
/// ```
pub fn distance(a: &Point3, b: &Point3, p: &Point3) -> f64 {
    let ab = b - a;
    let ap = p - a;

    // The projection of `p` onto the carrying line falls at or before `a`.
    if ap.dot(&ab) <= 0.0 {
        return ap.norm();
    }

    let bp = p - b;

    // The projection falls at or past `b`.
    if bp.dot(&ab) >= 0.0 {
        return bp.norm();
    }

    // Strictly between the endpoints: the height of the parallelogram
    // spanned by `ab` and `ap` over the base `ab`.
    ab.cross(&ap).norm() / ab.norm()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_past_the_far_endpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let p = Point3::new(1.0, 1.0, 0.0);
        assert_eq!(distance(&a, &b, &p), 1.0);
    }

    #[test]
    fn perpendicular_foot_between_the_endpoints() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let p = Point3::new(1.0, 1.0, 0.0);
        assert_eq!(distance(&a, &b, &p), 1.0);
    }

    #[test]
    fn projection_before_the_near_endpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let p = Point3::new(-1.0, 0.0, 0.0);
        assert_eq!(distance(&a, &b, &p), 1.0);
    }

    #[test]
    fn zero_at_each_endpoint() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(distance(&a, &b, &a), 0.0);
        assert_eq!(distance(&a, &b, &b), 0.0);
    }

    #[test]
    fn zero_in_the_interior() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 2.0, 2.0);
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(distance(&a, &b, &p), 0.0);
    }

    #[test]
    fn off_axis_interior_distance() {
        // The segment runs up the z axis; (3, 4, 1) projects onto its
        // interior and sits a 3-4-5 hypotenuse away from it.
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 0.0, 2.0);
        let p = Point3::new(3.0, 4.0, 1.0);
        assert_eq!(distance(&a, &b, &p), 5.0);
    }

    #[test]
    fn degenerate_segment_measures_to_the_point() {
        let a = Point3::new(3.0, -1.0, 2.0);
        let p = Point3::new(7.0, 2.0, 2.0);
        assert_eq!(distance(&a, &a, &p), 5.0);
        assert_eq!(distance(&a, &a, &p), (p - a).norm());
    }

    #[test]
    fn degenerate_segment_at_the_query_point() {
        let a = Point3::new(-2.5, 0.5, 9.0);
        assert_eq!(distance(&a, &a, &a), 0.0);
    }
}
