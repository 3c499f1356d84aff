//! Prints the distance for the segment and query point from the exercise
//! statement.

use exercises::segment::{distance, Point3};

fn main() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let p = Point3::new(1.0, 1.0, 0.0);

    println!("Distance = {}", distance(&a, &b, &p));
}
