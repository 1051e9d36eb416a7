//! Implementation details of the contact computations.

pub use self::contact_sphere_triangle::{
    contact_sphere_triangle, contact_sphere_triangle_with_computed_normal,
    contact_triangle_sphere, SphereTriangleContact, SPHERE_TRIANGLE_DISTANCE_OFFSET,
};

mod contact_sphere_triangle;
