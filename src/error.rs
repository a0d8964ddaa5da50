//! Error types for trajectory generation

use thiserror::Error;

/// Errors that can occur while validating a request or loading configuration
#[derive(Error, Debug)]
pub enum TrajectoryError {
    #[error("Invalid frequency: {0} (must be a finite number greater than zero)")]
    InvalidFrequency(f64),

    #[error("Invalid frequency randomizer: {0} (must be finite and non-negative)")]
    InvalidRandomizer(f64),

    #[error("Invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: Axis, value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TrajectoryError {
    /// Whether the error was caused by caller-supplied arguments
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TrajectoryError::InvalidFrequency(_)
                | TrajectoryError::InvalidRandomizer(_)
                | TrajectoryError::InvalidCoordinate { .. }
        )
    }
}

/// Result type for trajectory operations
pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// Coordinate axis, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}
