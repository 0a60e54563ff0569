//! Error types for the simulation engine.
//!
//! Configuration problems are reported when a grid or controller is built or
//! reconfigured, never from inside a running tick. Coordinate-addressed calls
//! report [`SimError::OutOfBounds`] instead of wrapping or clamping.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Rejected dimensions, probabilities, limits or intervals
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[must_use]
    pub fn out_of_bounds(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
