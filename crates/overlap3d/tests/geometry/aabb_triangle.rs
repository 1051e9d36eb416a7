use overlap3d::bounding_volume::Aabb;
use overlap3d::math::{Point, Real, Vector};
use overlap3d::query::{self, sat::AabbTriangleSeparatingAxis};
use overlap3d::shape::Triangle;

fn random_triangle_in(aabb: &Aabb, rng: &mut oorandom::Rand32) -> Triangle {
    let mut pt = || {
        let t = Vector::new(
            rng.rand_float() as Real,
            rng.rand_float() as Real,
            rng.rand_float() as Real,
        );
        aabb.mins + aabb.extents().component_mul(&t)
    };
    Triangle::new(pt(), pt(), pt())
}

#[test]
fn enclosed_triangles_intersect() {
    let aabb = Aabb::new(Point::new(-1.0, -2.0, -3.0), Point::new(3.0, 2.0, 1.0));
    let mut rng = oorandom::Rand32::new(0);

    for _ in 0..1000 {
        let triangle = random_triangle_in(&aabb, &mut rng);
        assert!(query::intersection_test_aabb_triangle(&aabb, &triangle));
        assert_eq!(query::sat::aabb_triangle_find_separating_axis(&aabb, &triangle), None);
    }
}

#[test]
fn far_triangles_are_separated() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..300 {
        let triangle = random_triangle_in(&aabb, &mut rng);

        for i in 0..3 {
            for sign in [-1.0, 1.0] {
                // Box half-extent plus triangle extent, with some margin.
                let mut shift = Vector::zeros();
                shift[i] = sign * 4.5;
                let far = triangle.translated(&shift);

                assert!(!query::intersection_test_aabb_triangle(&aabb, &far));
                assert!(!query::details::intersection_test_triangle_aabb(&far, &aabb));
            }
        }
    }
}

#[test]
fn separating_axis_of_translated_triangle() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let triangle = Triangle::new(
        Point::new(-0.5, -0.5, 0.0),
        Point::new(0.5, -0.5, 0.0),
        Point::new(0.0, 0.5, 0.0),
    );

    let up = triangle.translated(&Vector::new(0.0, 0.0, 10.0));
    assert_eq!(
        query::sat::aabb_triangle_find_separating_axis(&aabb, &up),
        Some(AabbTriangleSeparatingAxis::EdgeCross {
            aabb_axis: 0,
            triangle_edge: 1
        })
    );
}

#[test]
fn large_triangle_crossing_small_box() {
    // None of the triangle vertices are inside the box, but its interior is.
    let aabb = Aabb::new(Point::new(-0.1, -0.1, -0.1), Point::new(0.1, 0.1, 0.1));
    let triangle = Triangle::new(
        Point::new(-10.0, -10.0, 0.05),
        Point::new(10.0, -10.0, -0.05),
        Point::new(0.0, 10.0, 0.0),
    );

    assert!(query::intersection_test_aabb_triangle(&aabb, &triangle));
    assert!(!query::intersection_test_aabb_triangle(
        &aabb.translated(&Vector::new(0.0, 0.0, 0.5)),
        &triangle
    ));
}
