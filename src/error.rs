//! Error types for scene construction and configuration loading.

use thiserror::Error;

/// Invalid fan or wall setup. Raised while building the scene, never per frame.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The fan needs at least one angular step.
    #[error("ray count must be at least 1")]
    InvalidRayCount,

    /// Rays must have a positive, finite length.
    #[error("ray length must be positive and finite, got {0}")]
    InvalidRayLength(f32),

    #[error("angular span must be finite, got {0}")]
    InvalidAngularSpan(f32),

    #[error("fan origin must be finite")]
    NonFiniteOrigin,

    /// A wall edge refers to a vertex that does not exist.
    #[error("wall {wall}: edge index {index} out of range for {vertex_count} vertices")]
    EdgeIndexOutOfRange {
        wall: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Per-vertex colors must parallel the positions.
    #[error("wall {wall}: {colors} colors for {positions} positions")]
    ColorCountMismatch {
        wall: usize,
        positions: usize,
        colors: usize,
    },
}

/// Failure to read or parse a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
