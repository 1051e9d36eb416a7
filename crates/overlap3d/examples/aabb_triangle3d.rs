use overlap3d::bounding_volume::Aabb;
use overlap3d::math::{Point, Vector};
use overlap3d::query;
use overlap3d::query::sat::{self, AabbTriangleSeparatingAxis};
use overlap3d::shape::Triangle;

fn main() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let triangle = Triangle::new(
        Point::new(-0.5, -0.5, 0.0),
        Point::new(0.5, -0.5, 0.0),
        Point::new(0.0, 0.5, 0.0),
    );
    let far_triangle = triangle.translated(&Vector::new(10.0, 0.0, 0.0));

    let intersecting = query::intersection_test_aabb_triangle(&aabb, &triangle);
    let not_intersecting = !query::intersection_test_aabb_triangle(&aabb, &far_triangle);

    assert!(intersecting);
    assert!(not_intersecting);

    // The separating axis is the cross product between the z axis and the edge `c - b`.
    assert_eq!(
        sat::aabb_triangle_find_separating_axis(&aabb, &far_triangle),
        Some(AabbTriangleSeparatingAxis::EdgeCross {
            aabb_axis: 2,
            triangle_edge: 1,
        })
    );
}
