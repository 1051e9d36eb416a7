use overlap3d::math::Point;
use overlap3d::query;
use overlap3d::shape::{Segment, Triangle};

fn main() {
    let triangle = Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    );
    // The triangle faces +z: only segments going down cross its front face.
    let down = Segment::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, -1.0));
    let up = down.swapped();

    let hit = query::intersection_segment_triangle(&down, &triangle);
    let no_hit = query::intersection_segment_triangle(&up, &triangle);
    let two_sided_hit = query::intersection_segment_triangle_two_sided(&up, &triangle);

    assert!(hit.is_some());
    assert!(no_hit.is_none());
    assert!(two_sided_hit.is_some());

    if let Some(hit) = hit {
        println!("Hit at {} (toi: {}).", hit.point, hit.toi);
    }
}
