pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod fan;
pub mod frame_timer;
pub mod geometry;
pub mod input;
pub mod logger;
pub mod ray;
pub mod raycast;
pub mod wall;

pub use color::Rgb;
pub use config::Config;
pub use controller::FanController;
pub use error::{ConfigError, SceneError};
pub use fan::{FanSnapshot, RayFan};
pub use frame_timer::{FrameStats, FrameTimer};
pub use geometry::{LineSegment, Orientation, Point};
pub use input::{normalize_cursor, ButtonEdge, Edge, FrameInput};
pub use ray::Ray;
pub use raycast::raycast;
pub use wall::{Wall, WallSet};
