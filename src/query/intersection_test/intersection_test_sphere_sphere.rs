use crate::shape::Sphere;

/// Intersection test between spheres.
///
/// Spheres that are exactly touching are considered intersecting.
#[inline]
pub fn intersection_test_sphere_sphere(sphere1: &Sphere, sphere2: &Sphere) -> bool {
    let distance_squared = na::distance_squared(&sphere1.center, &sphere2.center);
    let sum_radius = sphere1.radius + sphere2.radius;
    distance_squared <= sum_radius * sum_radius
}
