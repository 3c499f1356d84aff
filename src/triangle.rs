//! The smallest-triangle exercise: among a set of points on the plane, find
//! the three forming the valid triangle with the smallest perimeter.
//!
//! The exercise statement draws the candidate points at random with integer
//! coordinates in `[-100, 100)`, then asks for the best triple. Collinear
//! triples span no area and do not count as triangles; right angles are as
//! good as any other.
//!
//! # Examples
//!
//! ```
//! use exercises::triangle::{smallest_triangle, Point2};
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 3.0),
//!     Point2::new(80.0, 80.0),
//! ];
//!
//! // The cluster near the origin wins; the far corner only stretches any
//! // triangle containing it.
//! let best = smallest_triangle(&points).unwrap();
//! assert!(best.iter().all(|p| p.x <= 4.0 && p.y <= 3.0));
//! ```

use rand::Rng;

/// A position on the plane, double precision.
pub type Point2 = nalgebra::Point2<f64>;

/// Geometric tolerance: triples spanning an area this close to zero count
/// as collinear.
pub const TOLERANCE: f64 = 1e-10;

/// Draws `count` random points with integer coordinates in `[-100, 100)`.
///
/// Coordinates collide freely; duplicate points are possible and simply form
/// degenerate triples that [`smallest_triangle`] skips.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Point2> {
    (0..count)
        .map(|_| {
            Point2::new(
                rng.gen_range(-100..100) as f64,
                rng.gen_range(-100..100) as f64,
            )
        })
        .collect()
}

/// The perimeter of the triangle `abc`.
pub fn perimeter(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b - a).norm() + (c - b).norm() + (a - c).norm()
}

/// Whether `abc` is a genuine triangle.
///
/// Three points fail to form one exactly when they are collinear within
/// [`TOLERANCE`], duplicates included. The test is the perp product of two
/// edge vectors, twice the signed area of the triple.
pub fn is_valid(a: &Point2, b: &Point2, c: &Point2) -> bool {
    let ab = b - a;
    let ac = c - a;
    ab.perp(&ac).abs() > TOLERANCE
}

/// Finds the three points forming the valid triangle with the smallest
/// perimeter, scanning every unordered triple.
///
/// Returns `None` when fewer than three points are given or when every
/// triple is collinear. Ties keep the triple encountered first, in input
/// order.
///
/// # Examples
///
/// ```
/// use exercises::triangle::{smallest_triangle, Point2};
///
/// let collinear = [
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// ];
/// assert!(smallest_triangle(&collinear).is_none());
/// ```
pub fn smallest_triangle(points: &[Point2]) -> Option<[Point2; 3]> {
    let mut best = None;
    let mut smallest = f64::INFINITY;

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            for k in j + 1..points.len() {
                let (a, b, c) = (points[i], points[j], points[k]);
                if !is_valid(&a, &b, &c) {
                    continue;
                }
                let size = perimeter(&a, &b, &c);
                if size < smallest {
                    smallest = size;
                    best = Some([a, b, c]);
                }
            }
        }
    }

    best
}
