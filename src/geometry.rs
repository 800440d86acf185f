use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Tolerance used by the collinearity check in `point_on_segment`
pub const COLLINEAR_EPSILON: f32 = 1e-5;

/// 2D point (or vector) in normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Unit vector at `angle` radians from the +x axis
    pub fn from_angle(angle: f32) -> Self {
        Point::new(angle.cos(), angle.sin())
    }

    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product
    pub fn cross(self, other: Point) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or None for a zero-length vector
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Point::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Point {
    fn from(p: [f32; 2]) -> Self {
        Point::new(p[0], p[1])
    }
}

impl From<Point> for [f32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A segment between two points. Used both for rays and wall edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        LineSegment { start, end }
    }

    pub fn length(&self) -> f32 {
        distance(self.start, self.end)
    }

    pub fn length_squared(&self) -> f32 {
        let d = self.end - self.start;
        d.dot(d)
    }
}

/// Turn direction of an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Classify the triple (p, q, r) by the sign of `(q - p) × (r - q)`.
///
/// Exact comparison against zero: nearly collinear inputs may flip between
/// clockwise and counter-clockwise from one frame to the next.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let value = (q - p).cross(r - q);
    if value > 0.0 {
        Orientation::CounterClockwise
    } else if value < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Intersection point of two segments, if they cross.
///
/// Crossing is decided with the four orientation tests; the point itself is
/// then solved from the two line equations `a*x + b*y = c`. Parallel or
/// collinear segments never produce a point, even when they overlap.
pub fn segments_intersect(l1: &LineSegment, l2: &LineSegment) -> Option<Point> {
    let o1 = orientation(l1.start, l1.end, l2.start);
    let o2 = orientation(l1.start, l1.end, l2.end);
    let o3 = orientation(l2.start, l2.end, l1.start);
    let o4 = orientation(l2.start, l2.end, l1.end);

    if o1 == o2 || o3 == o4 {
        return None;
    }

    let a1 = l1.end.y - l1.start.y;
    let b1 = l1.start.x - l1.end.x;
    let c1 = a1 * l1.start.x + b1 * l1.start.y;

    let a2 = l2.end.y - l2.start.y;
    let b2 = l2.start.x - l2.end.x;
    let c2 = a2 * l2.start.x + b2 * l2.start.y;

    let det = a1 * b2 - a2 * b1;
    if det.abs() < f32::EPSILON {
        return None;
    }

    Some(Point::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Whether `p` lies on the segment `l` (collinear within `COLLINEAR_EPSILON`
/// and projecting inside the endpoints)
pub fn point_on_segment(p: Point, l: &LineSegment) -> bool {
    let along = l.end - l.start;
    let to_p = p - l.start;

    if along.cross(to_p).abs() > COLLINEAR_EPSILON {
        return false;
    }

    let projection = to_p.dot(along);
    projection >= 0.0 && projection <= l.length_squared()
}

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f32 {
    (b - a).length()
}

/// Rotate `p` around `pivot` by `angle` radians (counter-clockwise)
pub fn rotate_about(p: Point, pivot: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let local = p - pivot;
    let rotated = Point::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos);
    rotated + pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> LineSegment {
        LineSegment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_orientation() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        assert_eq!(orientation(p, q, Point::new(2.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orientation(p, q, Point::new(2.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(p, q, Point::new(3.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn test_crossing_segments() {
        let hit = segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.5, -1.0, 0.5, 1.0));
        let hit = hit.expect("segments cross");
        assert_abs_diff_eq!(hit.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-6);

        // Diagonals of a square
        let hit = segments_intersect(&seg(-1.0, -1.0, 1.0, 1.0), &seg(-1.0, 1.0, 1.0, -1.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_disjoint_segments() {
        assert_eq!(segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, -1.0, 2.0, 1.0)), None);
        // Lines cross but the second segment stops short
        assert_eq!(segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.5, 0.5, 0.5, 1.0)), None);
    }

    #[test]
    fn test_parallel_and_collinear_report_nothing() {
        assert_eq!(segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)), None);
        // Overlapping collinear segments are not resolved to a point
        assert_eq!(segments_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.5, 0.0, 2.0, 0.0)), None);
    }

    #[test]
    fn test_endpoint_touch_reports_the_endpoint() {
        let hit = segments_intersect(&seg(0.0, 0.0, 0.5, 0.0), &seg(0.5, -1.0, 0.5, 1.0)).unwrap();
        assert_abs_diff_eq!(hit.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(hit.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_point_on_segment() {
        let wall = seg(-1.0, 0.0, 1.0, 0.0);
        assert!(point_on_segment(Point::new(0.0, 0.0), &wall));
        assert!(point_on_segment(Point::new(1.0, 0.0), &wall));
        assert!(point_on_segment(Point::new(0.3, 0.000001), &wall));
        assert!(!point_on_segment(Point::new(0.3, 0.01), &wall));
        // On the infinite line but outside the endpoints
        assert!(!point_on_segment(Point::new(1.5, 0.0), &wall));
        assert!(!point_on_segment(Point::new(-1.5, 0.0), &wall));
    }

    #[test]
    fn test_lengths() {
        assert_abs_diff_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(distance(Point::new(1.0, 1.0), Point::new(1.0, -1.0)), 2.0, epsilon = 1e-6);
        assert_eq!(Point::ORIGIN.normalized(), None);
    }

    #[test]
    fn test_rotate_about_pivot() {
        let pivot = Point::new(0.5, 0.5);
        let p = rotate_about(Point::new(1.5, 0.5), pivot, std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 1.5, epsilon = 1e-6);

        let same = rotate_about(pivot, pivot, 1.234);
        assert_eq!(same, pivot);
    }
}
