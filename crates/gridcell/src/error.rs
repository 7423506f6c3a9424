//! Error types for persisted snapshots and configuration.

use thiserror::Error;

/// Raised when snapshot records cannot be turned into a grid.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unknown cell type index {index}")]
    UnknownVariant { index: u8 },
    #[error("unknown direction index {index}")]
    UnknownDirection { index: u8 },
    #[error("two records occupy ({x}, {y})")]
    Overlap { x: i32, y: i32 },
    #[error("record at ({x}, {y}) lies outside the grid bounds")]
    OutOfBounds { x: i32, y: i32 },
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raised when a simulation config fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tick rate must be positive, got {0}")]
    TickRate(f32),
    #[error("max ticks per advance must be at least 1")]
    MaxTicks,
    #[error("inverted {axis} bounds: {min} > {max}")]
    InvertedBounds { axis: char, min: i32, max: i32 },
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
