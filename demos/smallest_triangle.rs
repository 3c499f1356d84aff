//! Draws a handful of random points and prints the smallest triangle among
//! them.

use exercises::triangle::{perimeter, random_points, smallest_triangle};

fn main() {
    let points = random_points(&mut rand::thread_rng(), 32);

    match smallest_triangle(&points) {
        Some([a, b, c]) => {
            println!("Smallest triangle: {}, {}, {}", a, b, c);
            println!("Perimeter: {}", perimeter(&a, &b, &c));
        }
        None => println!("No valid triangle among {} points", points.len()),
    }
}
