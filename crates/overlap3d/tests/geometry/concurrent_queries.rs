use overlap3d::bounding_volume::Aabb;
use overlap3d::math::{Point, Real};
use overlap3d::query;
use overlap3d::shape::{Segment, Sphere, Triangle};

fn run_queries(seed: u64) -> Vec<(bool, bool, bool)> {
    let mut rng = oorandom::Rand32::new(seed);
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let mut out = Vec::new();

    for _ in 0..200 {
        let mut pt = || {
            Point::new(
                rng.rand_float() as Real * 4.0 - 2.0,
                rng.rand_float() as Real * 4.0 - 2.0,
                rng.rand_float() as Real * 4.0 - 2.0,
            )
        };
        let triangle = Triangle::new(pt(), pt(), pt());
        let sphere = Sphere::new(pt(), 0.5);
        let segment = Segment::new(pt(), pt());

        out.push((
            query::intersection_test_aabb_triangle(&aabb, &triangle),
            query::contact_sphere_triangle_with_computed_normal(&sphere, &triangle).is_some(),
            query::intersection_segment_triangle(&segment, &triangle).is_some(),
        ));
    }

    out
}

#[test]
fn queries_are_reentrant_across_threads() {
    let expected: Vec<_> = (0..4).map(run_queries).collect();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|seed| s.spawn(move || run_queries(seed)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
