use overlap3d::math::Point;
use overlap3d::query;
use overlap3d::shape::{Segment, Triangle};

fn xy_triangle() -> Triangle {
    Triangle::new(
        Point::new(-1.0, -1.0, 0.0),
        Point::new(1.0, -1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    )
}

#[test]
fn segment_through_triangle_center() {
    // The triangle normal is +z: going up the segment reaches the back face first.
    let upward = Segment::new(Point::new(0.0, 0.0, -1.0), Point::new(0.0, 0.0, 1.0));
    assert!(query::intersection_segment_triangle(&upward, &xy_triangle()).is_none());

    let downward = upward.swapped();
    let hit = query::intersection_segment_triangle(&downward, &xy_triangle()).unwrap();
    assert_relative_eq!(hit.point, Point::origin(), epsilon = 1.0e-6);
}

#[test]
fn one_sided_and_two_sided_agree_on_front_hits() {
    let mut rng = oorandom::Rand32::new(3);
    let triangle = xy_triangle();

    for _ in 0..500 {
        let x = rng.rand_float() * 3.0 - 1.5;
        let y = rng.rand_float() * 3.0 - 1.5;
        let top = Point::new(x, y, 1.0 + rng.rand_float());
        let bottom = Point::new(-y, x, -1.0 - rng.rand_float());
        let down = Segment::new(top, bottom);
        let up = down.swapped();

        let front = query::intersection_segment_triangle(&down, &triangle);
        let both_down = query::intersection_segment_triangle_two_sided(&down, &triangle);
        let both_up = query::intersection_segment_triangle_two_sided(&up, &triangle);

        assert!(query::intersection_segment_triangle(&up, &triangle).is_none());
        assert_eq!(front, both_down);
        assert_eq!(front.is_some(), both_up.is_some());

        if let (Some(down_hit), Some(up_hit)) = (front, both_up) {
            assert_relative_eq!(down_hit.point, up_hit.point, epsilon = 1.0e-5);
            assert_relative_eq!(down_hit.toi, 1.0 - up_hit.toi, epsilon = 1.0e-5);
            assert_relative_eq!(down.point_at(down_hit.toi), down_hit.point, epsilon = 1.0e-4);
            assert_relative_eq!(down_hit.point.z, 0.0, epsilon = 1.0e-5);
        }
    }
}
