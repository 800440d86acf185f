use crate::geometry::{distance, rotate_about, LineSegment, Point};

/// A single ray of the fan
/// The origin is shared and lives on the fan; the ray only tracks where it points and how far it reaches
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Unit direction, kept in sync with the endpoint by rotation and clipping
    pub direction: Point,
    /// Length of the ray when nothing obstructs it
    pub max_length: f32,
    /// Current (possibly clipped) tip of the ray
    pub endpoint: Point,
}

impl Ray {
    /// Create an unobstructed ray from `origin` along `direction`
    pub fn new(origin: Point, direction: Point, max_length: f32) -> Self {
        Ray {
            direction,
            max_length,
            endpoint: origin + direction * max_length,
        }
    }

    /// Segment from the shared origin to the current tip
    pub fn segment(&self, origin: Point) -> LineSegment {
        LineSegment::new(origin, self.endpoint)
    }

    /// Current visible length
    pub fn length(&self, origin: Point) -> f32 {
        distance(origin, self.endpoint)
    }

    /// Re-derive the direction from the stored endpoint.
    /// A ray clipped down to its own origin has no direction of its own, so the cached one is kept.
    pub fn refresh_direction(&mut self, origin: Point) {
        if let Some(direction) = (self.endpoint - origin).normalized() {
            self.direction = direction;
        }
    }

    /// Stretch the ray back to its full length along its direction
    pub fn reset(&mut self, origin: Point) {
        self.endpoint = origin + self.direction * self.max_length;
    }

    /// Rotate the tip around `origin` and turn the direction with it
    pub fn rotate(&mut self, origin: Point, angle: f32) {
        self.endpoint = rotate_about(self.endpoint, origin, angle);
        self.direction = rotate_about(self.direction, Point::ORIGIN, angle);
    }
}
