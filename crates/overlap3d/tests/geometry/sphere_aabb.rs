use overlap3d::bounding_volume::{Aabb, AxisAlignedBounds};
use overlap3d::math::{Point, Real, Vector};
use overlap3d::query;
use overlap3d::shape::Sphere;

/// Minimal stand-in for the node of a spatial index.
struct OctreeNode {
    min: Point<Real>,
    max: Point<Real>,
    #[allow(dead_code)]
    depth: u32,
}

impl AxisAlignedBounds for OctreeNode {
    fn mins(&self) -> Point<Real> {
        self.min
    }

    fn maxs(&self) -> Point<Real> {
        self.max
    }
}

#[test]
fn point_inside_box_intersects() {
    let aabb = Aabb::new(Point::new(-2.0, 0.0, 1.0), Point::new(2.0, 1.0, 5.0));
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        // Strictly inside.
        let t = Vector::new(
            rng.rand_float() as Real * 0.98 + 0.01,
            rng.rand_float() as Real * 0.98 + 0.01,
            rng.rand_float() as Real * 0.98 + 0.01,
        );
        let center = aabb.mins + aabb.extents().component_mul(&t);
        let sphere = Sphere::new(center, 0.0);
        assert!(query::intersection_test_sphere_aabb(&sphere, &aabb));
    }
}

#[test]
fn sphere_outside_on_one_axis() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    let radius = 0.75;

    for i in 0..3 {
        for sign in [-1.0, 1.0] {
            let mut center = Point::origin();
            center[i] = sign * (1.0 + radius + 0.01);
            let sphere = Sphere::new(center, radius);
            assert!(!query::intersection_test_sphere_aabb(&sphere, &aabb));
            assert!(!query::intersection_test_aabb_sphere(&aabb, &sphere));

            // Touching the face.
            center[i] = sign * (1.0 + radius);
            let sphere = Sphere::new(center, radius);
            assert!(query::intersection_test_sphere_aabb(&sphere, &aabb));
        }
    }
}

#[test]
fn octree_node_can_be_tested_like_an_aabb() {
    let node = OctreeNode {
        min: Point::new(0.0, 0.0, 0.0),
        max: Point::new(4.0, 4.0, 4.0),
        depth: 2,
    };
    let aabb = Aabb::new(node.min, node.max);
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..500 {
        let mut coord = || rng.rand_float() as Real * 10.0 - 3.0;
        let sphere = Sphere::new(Point::new(coord(), coord(), coord()), coord().abs());
        assert_eq!(
            query::intersection_test_sphere_aabb(&sphere, &node),
            query::intersection_test_sphere_aabb(&sphere, &aabb)
        );
    }
}
