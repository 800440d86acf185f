use crate::color::Rgb;
use crate::error::SceneError;
use crate::geometry::{LineSegment, Point};
use crate::ray::Ray;
use log::info;
use serde::{Deserialize, Serialize};

/// A fan of rays sharing one origin.
///
/// The point sequence handed to the renderer is `[origin, endpoint_0, endpoint_1, ..]`
/// and `colors` runs parallel to it. The number of rays never changes after
/// construction; only orientation, position and clip length do.
#[derive(Debug, Clone)]
pub struct RayFan {
    origin: Point,
    pub(crate) rays: Vec<Ray>,
    colors: Vec<Rgb>,
    max_ray_length: f32,
}

/// Serializable copy of a fan's current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FanSnapshot {
    pub origin: [f32; 2],
    pub endpoints: Vec<[f32; 2]>,
    pub colors: Vec<Rgb>,
    pub max_ray_length: f32,
}

impl RayFan {
    /// Build a fan of `ray_count + 1` rays spread evenly over `angular_span_degrees`,
    /// starting at 0° (the +x axis) and turning counter-clockwise.
    pub fn build(
        origin: Point,
        ray_count: usize,
        angular_span_degrees: f32,
        max_ray_length: f32,
        color: Rgb,
    ) -> Result<Self, SceneError> {
        if ray_count == 0 {
            return Err(SceneError::InvalidRayCount);
        }
        if !(max_ray_length > 0.0 && max_ray_length.is_finite()) {
            return Err(SceneError::InvalidRayLength(max_ray_length));
        }
        if !angular_span_degrees.is_finite() {
            return Err(SceneError::InvalidAngularSpan(angular_span_degrees));
        }
        if !origin.is_finite() {
            return Err(SceneError::NonFiniteOrigin);
        }

        let step = angular_span_degrees.to_radians() / ray_count as f32;
        let rays: Vec<Ray> = (0..=ray_count)
            .map(|i| Ray::new(origin, Point::from_angle(step * i as f32), max_ray_length))
            .collect();
        let colors = vec![color; rays.len() + 1];

        info!(
            "Built ray fan: {} rays over {}°, max length {}",
            rays.len(),
            angular_span_degrees,
            max_ray_length
        );

        Ok(RayFan {
            origin,
            rays,
            colors,
            max_ray_length,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn max_ray_length(&self) -> f32 {
        self.max_ray_length
    }

    /// Per-vertex colors, parallel to `positions()`
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Rotate the whole fan about its origin by `angle` radians
    pub fn rotate(&mut self, angle: f32) {
        let origin = self.origin;
        for ray in &mut self.rays {
            ray.rotate(origin, angle);
        }
    }

    /// Move the origin to `new_origin`, carrying every endpoint along by the same delta
    pub fn translate(&mut self, new_origin: Point) {
        let delta = new_origin - self.origin;
        self.origin = new_origin;
        for ray in &mut self.rays {
            ray.endpoint = ray.endpoint + delta;
        }
    }

    /// Origin followed by every ray endpoint
    pub fn positions(&self) -> Vec<Point> {
        std::iter::once(self.origin)
            .chain(self.rays.iter().map(|ray| ray.endpoint))
            .collect()
    }

    /// Element indices for drawing the fan as a line list: `[0, 1, 0, 2, ..]`
    pub fn line_indices(&self) -> Vec<u32> {
        (1..=self.rays.len() as u32).flat_map(|i| [0, i]).collect()
    }

    /// One segment per ray, from the origin to the current tip
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.rays.iter().map(move |ray| ray.segment(self.origin))
    }

    pub fn snapshot(&self) -> FanSnapshot {
        FanSnapshot {
            origin: self.origin.into(),
            endpoints: self.rays.iter().map(|ray| ray.endpoint.into()).collect(),
            colors: self.colors.clone(),
            max_ray_length: self.max_ray_length,
        }
    }
}
