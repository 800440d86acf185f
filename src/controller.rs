use crate::fan::RayFan;
use crate::geometry::Point;
use crate::input::{ButtonEdge, Edge, FrameInput};
use log::debug;

/// Default angle, in radians, of one rotation gesture
pub const DEFAULT_ROTATION_STEP: f32 = 0.1;

/// Applies user input to a fan: a fixed rotation step per button release, then
/// a rigid move to the cursor.
///
/// Holds the only state carried between frames besides the fan itself.
#[derive(Debug, Clone)]
pub struct FanController {
    rotate_positive: ButtonEdge,
    rotate_negative: ButtonEdge,
    last_cursor: Point,
    rotation_step: f32,
}

impl FanController {
    /// Controller anchored at the fan's current origin
    pub fn new(fan: &RayFan, rotation_step: f32) -> Self {
        FanController {
            rotate_positive: ButtonEdge::new(),
            rotate_negative: ButtonEdge::new(),
            last_cursor: fan.origin(),
            rotation_step,
        }
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    pub fn last_cursor(&self) -> Point {
        self.last_cursor
    }

    /// Run one frame of transforms: rotate on release edges, then translate
    pub fn update(&mut self, fan: &mut RayFan, input: &FrameInput) {
        if self.rotate_negative.update(input.rotate_negative) == Edge::Released {
            debug!("Rotate gesture: {}", -self.rotation_step);
            fan.rotate(-self.rotation_step);
        }
        if self.rotate_positive.update(input.rotate_positive) == Edge::Released {
            debug!("Rotate gesture: {}", self.rotation_step);
            fan.rotate(self.rotation_step);
        }

        if input.cursor != self.last_cursor {
            fan.translate(input.cursor);
            self.last_cursor = input.cursor;
        }
    }
}
