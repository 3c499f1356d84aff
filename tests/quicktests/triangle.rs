use exercises::triangle::{is_valid, perimeter, smallest_triangle, Point2};

fn to_points(coords: &[(i8, i8)]) -> Vec<Point2> {
    coords
        .iter()
        .map(|&(x, y)| Point2::new(f64::from(x), f64::from(y)))
        .collect()
}

fn triples(points: &[Point2]) -> Vec<[Point2; 3]> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            for k in j + 1..points.len() {
                out.push([points[i], points[j], points[k]]);
            }
        }
    }

    out
}

quickcheck::quickcheck! {
    fn the_best_triangle_beats_every_other_triple(coords: Vec<(i8, i8)>) -> bool {
        // A dozen points is 220 triples, plenty to cross-check the scan
        // without the cubic growth swallowing the test run.
        let mut coords = coords;
        coords.truncate(12);
        let points = to_points(&coords);

        match smallest_triangle(&points) {
            None => triples(&points).iter().all(|[a, b, c]| !is_valid(a, b, c)),
            Some([a, b, c]) => {
                let best = perimeter(&a, &b, &c);
                is_valid(&a, &b, &c)
                    && triples(&points)
                        .iter()
                        .filter(|[x, y, z]| is_valid(x, y, z))
                        .all(|[x, y, z]| best <= perimeter(x, y, z) + 1e-9)
            }
        }
    }
}
