use crate::geometry::Point;

/// Map a cursor position in window pixels (y down) to normalized device coordinates (y up).
/// A window without area maps everything to the center.
pub fn normalize_cursor(px: f32, py: f32, width: f32, height: f32) -> Point {
    if width <= 0.0 || height <= 0.0 {
        return Point::ORIGIN;
    }
    Point::new(2.0 * px / width - 1.0, 1.0 - 2.0 * py / height)
}

/// Transition observed between two consecutive samples of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    None,
    Pressed,
    Released,
}

/// Remembers the previous sample of a button so presses and releases can be detected
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    was_pressed: bool,
}

impl ButtonEdge {
    pub fn new() -> Self {
        ButtonEdge { was_pressed: false }
    }

    /// Feed the current raw state, get the transition since the last call
    pub fn update(&mut self, pressed: bool) -> Edge {
        let edge = match (self.was_pressed, pressed) {
            (false, true) => Edge::Pressed,
            (true, false) => Edge::Released,
            _ => Edge::None,
        };
        self.was_pressed = pressed;
        edge
    }

    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

/// Input sampled by the host once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Cursor in normalized device coordinates
    pub cursor: Point,
    /// Raw state of the button that turns the fan counter-clockwise
    pub rotate_positive: bool,
    /// Raw state of the button that turns the fan clockwise
    pub rotate_negative: bool,
}

impl FrameInput {
    pub fn new(cursor: Point) -> Self {
        FrameInput {
            cursor,
            rotate_positive: false,
            rotate_negative: false,
        }
    }
}
