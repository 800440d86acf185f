#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use rayfan::{Point, RayFan, Rgb, Wall, WallSet};

/// A wall made of a single edge from `a` to `b`
pub fn segment_wall(a: [f32; 2], b: [f32; 2]) -> Wall {
    Wall::new(
        0,
        vec![[a[0], a[1], 0.0], [b[0], b[1], 0.0]],
        vec![Rgb::WHITE; 2],
        vec![0, 1],
    )
    .expect("two vertices, two indices")
}

/// A wall from 2D vertices and an explicit index list
pub fn polyline_wall(vertices: &[[f32; 2]], edges: &[u32]) -> Wall {
    Wall::new(
        0,
        vertices.iter().map(|v| [v[0], v[1], 0.0]).collect(),
        vec![Rgb::WHITE; vertices.len()],
        edges.to_vec(),
    )
    .expect("valid wall")
}

pub fn wall_set(walls: Vec<Wall>) -> WallSet {
    walls.into_iter().collect()
}

/// Fan whose rays all point along `angle_degrees` (zero span)
pub fn pointed_fan(origin: Point, angle_degrees: f32, max_length: f32) -> RayFan {
    let mut fan = RayFan::build(origin, 1, 0.0, max_length, Rgb::WHITE).expect("valid fan");
    fan.rotate(angle_degrees.to_radians());
    fan
}

/// Fan spread over a full turn
pub fn full_fan(origin: Point, ray_count: usize, max_length: f32) -> RayFan {
    RayFan::build(origin, ray_count, 360.0, max_length, Rgb::YELLOW).expect("valid fan")
}

pub fn assert_point_near(actual: Point, expected: Point, epsilon: f32) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = epsilon);
}

pub fn assert_same_endpoints(a: &RayFan, b: &RayFan, epsilon: f32) {
    assert_eq!(a.rays().len(), b.rays().len());
    for (ra, rb) in a.rays().iter().zip(b.rays()) {
        assert_point_near(ra.endpoint, rb.endpoint, epsilon);
    }
}

/// Every ray no longer than its maximum, directions unit length
pub fn assert_fan_invariant(fan: &RayFan) {
    let origin = fan.origin();
    for ray in fan.rays() {
        assert!(
            ray.length(origin) <= ray.max_length + 1e-5,
            "ray of length {} exceeds max {}",
            ray.length(origin),
            ray.max_length
        );
        assert_abs_diff_eq!(ray.direction.length(), 1.0, epsilon = 1e-4);
    }
}
