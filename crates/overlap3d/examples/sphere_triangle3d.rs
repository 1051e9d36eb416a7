use overlap3d::math::Point;
use overlap3d::query;
use overlap3d::shape::{Sphere, Triangle};

fn main() {
    let triangle = Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    let sphere_intersecting = Sphere::new(Point::new(0.0, 0.0, 0.5), 1.0);
    let sphere_disjoint = Sphere::new(Point::new(0.0, 0.0, 2.0), 1.0);

    let contact =
        query::contact_sphere_triangle_with_computed_normal(&sphere_intersecting, &triangle);
    let no_contact =
        query::contact_sphere_triangle_with_computed_normal(&sphere_disjoint, &triangle);

    assert!(contact.is_some());
    assert!(no_contact.is_none());

    if let Some(contact) = contact {
        println!("Distance: {}, point: {}", contact.dist, contact.point);
    }
}
