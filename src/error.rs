//! Error types for rover runs and mission loading.
//!
//! Rover errors are per-rover and never abort a batch; mission errors stop the
//! program before any rover is started.

use crate::plateau::Position;
use thiserror::Error;

/// Reasons a single rover run stops before consuming all of its instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RoverError {
    #[error("initial coordinates {0} are outside of the plateau bounds")]
    OutOfBoundsStart(Position),

    #[error("invalid instruction '{0}' found")]
    InvalidInstruction(char),

    #[error("rover moved outside the plateau bounds to {0}")]
    OutOfBoundsMove(Position),
}

/// Failures while building or loading a [`Mission`](crate::mission::Mission).
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("failed to read mission file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed mission description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plateau bounds must be non-negative, got ({max_x}, {max_y})")]
    NegativePlateau { max_x: i32, max_y: i32 },

    #[error("invalid direction '{0}', expected one of N, E, S, W")]
    InvalidDirection(char),
}

/// Result type alias for a single rover run.
pub type RoverResult<T> = Result<T, RoverError>;
