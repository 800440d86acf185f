use crate::color::Rgb;
use crate::controller::{FanController, DEFAULT_ROTATION_STEP};
use crate::error::{ConfigError, SceneError};
use crate::fan::RayFan;
use crate::geometry::Point;
use crate::wall::{Wall, WallSet};
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fan: FanConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default = "default_walls")]
    pub walls: Vec<WallConfig>,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct FanConfig {
    #[serde(default)]
    pub origin: [f32; 2],
    #[serde(default = "default_ray_count")]
    pub ray_count: usize,
    #[serde(default = "default_angular_span")]
    pub angular_span_degrees: f32,
    #[serde(default = "default_max_ray_length")]
    pub max_ray_length: f32,
    #[serde(default = "default_ray_color")]
    pub color: Rgb,
}

#[derive(Debug, Deserialize)]
pub struct ControlsConfig {
    /// Radians turned per button release
    #[serde(default = "default_rotation_step")]
    pub rotation_step: f32,
}

/// One obstacle. Edges pair up consecutive indices; repeat the first index to close a polygon.
#[derive(Debug, Clone, Deserialize)]
pub struct WallConfig {
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex colors; white when omitted
    #[serde(default)]
    pub colors: Vec<Rgb>,
    pub edges: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_window_size")]
    pub window_width: i32,
    #[serde(default = "default_window_size")]
    pub window_height: i32,
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default = "default_ray_thickness")]
    pub ray_thickness: f32,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_report_fps")]
    pub report_fps: bool,
}

// Default values
fn default_ray_count() -> usize { 36 }
fn default_angular_span() -> f32 { 360.0 }
fn default_max_ray_length() -> f32 { 2.0 }
fn default_ray_color() -> Rgb { Rgb::YELLOW }
fn default_rotation_step() -> f32 { DEFAULT_ROTATION_STEP }
fn default_window_title() -> String { "Ray Fan - Visibility Demo".to_string() }
fn default_window_size() -> i32 { 1000 }
fn default_background() -> Rgb { Rgb::new(0.0, 0.0, 0.4) }
fn default_ray_thickness() -> f32 { 1.0 }
fn default_wall_thickness() -> f32 { 3.0 }
fn default_log_level() -> String { "info".to_string() }
fn default_report_fps() -> bool { true }

fn default_walls() -> Vec<WallConfig> {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let green = Rgb::new(0.0, 1.0, 0.0);
    vec![
        // Closed square, upper left
        WallConfig {
            positions: vec![
                [-0.7, 0.3, 0.0],
                [-0.3, 0.3, 0.0],
                [-0.3, 0.7, 0.0],
                [-0.7, 0.7, 0.0],
            ],
            colors: vec![red; 4],
            edges: vec![0, 1, 2, 3, 0],
        },
        // Open triangle, lower right
        WallConfig {
            positions: vec![[0.3, -0.3, 0.0], [0.8, -0.4, 0.0], [0.5, -0.8, 0.0]],
            colors: vec![green; 3],
            edges: vec![0, 1, 2],
        },
        // Lone segment
        WallConfig {
            positions: vec![[0.2, 0.6, 0.0], [0.7, 0.2, 0.0]],
            colors: vec![Rgb::WHITE; 2],
            edges: vec![0, 1],
        },
    ]
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            ray_count: default_ray_count(),
            angular_span_degrees: default_angular_span(),
            max_ray_length: default_max_ray_length(),
            color: default_ray_color(),
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotation_step: default_rotation_step(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_width: default_window_size(),
            window_height: default_window_size(),
            background: default_background(),
            ray_thickness: default_ray_thickness(),
            wall_thickness: default_wall_thickness(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            report_fps: default_report_fps(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fan: FanConfig::default(),
            controls: ControlsConfig::default(),
            walls: default_walls(),
            visual: VisualConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config.toml`, or use defaults if it is missing or malformed
    pub fn load() -> Self {
        Self::or_default(Self::load_from(CONFIG_PATH))
    }

    /// Log the outcome of a load attempt and fall back to defaults on failure
    pub fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        match loaded {
            Ok(config) => {
                info!("Loaded configuration from {}", CONFIG_PATH);
                config
            }
            Err(ConfigError::Io(e)) => {
                info!("No {} found ({}), using default configuration", CONFIG_PATH, e);
                Config::default()
            }
            Err(e) => {
                warn!("{}", e);
                warn!("Using default configuration");
                Config::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn build_fan(&self) -> Result<RayFan, SceneError> {
        RayFan::build(
            Point::from(self.fan.origin),
            self.fan.ray_count,
            self.fan.angular_span_degrees,
            self.fan.max_ray_length,
            self.fan.color,
        )
    }

    pub fn build_walls(&self) -> Result<WallSet, SceneError> {
        let walls = self
            .walls
            .iter()
            .enumerate()
            .map(|(id, wall)| {
                let colors = if wall.colors.is_empty() {
                    vec![Rgb::WHITE; wall.positions.len()]
                } else {
                    wall.colors.clone()
                };
                Wall::new(id, wall.positions.clone(), colors, wall.edges.clone())
            })
            .collect::<Result<WallSet, _>>()?;

        info!("Built {} walls with {} edges", walls.len(), walls.segments().count());
        Ok(walls)
    }

    pub fn build_controller(&self, fan: &RayFan) -> FanController {
        FanController::new(fan, self.controls.rotation_step)
    }
}
