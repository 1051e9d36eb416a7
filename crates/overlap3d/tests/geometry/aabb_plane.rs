use overlap3d::bounding_volume::Aabb;
use overlap3d::math::{Point, Vector};
use overlap3d::query;
use overlap3d::shape::{Plane, Triangle};

#[test]
fn unit_cube_straddles_xy_plane() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let plane = Plane::new(Vector::z_axis(), 0.0);

    assert!(query::intersection_test_aabb_plane(&aabb, &plane));
    assert!(query::details::intersection_test_plane_aabb(&plane, &aabb));
}

#[test]
fn plane_sweeping_through_box() {
    let aabb = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 4.0, 1.0));

    let cases = [
        (-0.5, false),
        (0.0, true),
        (3.0, true),
        (4.0, true),
        (4.5, false),
    ];

    for (constant, expected) in cases {
        let plane = Plane::new(Vector::y_axis(), constant);
        assert_eq!(
            query::intersection_test_aabb_plane(&aabb, &plane),
            expected,
            "plane y = {}",
            constant
        );
    }
}

#[test]
fn triangle_plane_against_box() {
    let triangle = Triangle::new(
        Point::new(-5.0, -5.0, 0.25),
        Point::new(5.0, -5.0, 0.25),
        Point::new(0.0, 5.0, 0.25),
    );
    let plane = triangle.plane().unwrap();
    let aabb = Aabb::new(Point::new(-1.0, -1.0, 0.0), Point::new(1.0, 1.0, 0.5));

    assert!(query::intersection_test_aabb_plane(&aabb, &plane));
    assert!(query::intersection_test_aabb_plane(&aabb, &plane.flipped()));
    assert!(!query::intersection_test_aabb_plane(
        &aabb.translated(&Vector::new(0.0, 0.0, 1.0)),
        &plane
    ));
}
