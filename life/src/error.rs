// error.rs - Error types for the engine

use std::fmt;

/// Errors surfaced by [`Grid`](crate::Grid) and [`Engine`](crate::Engine) operations.
#[derive(Debug)]
pub enum LifeError {
    /// Board construction with zero rows or columns
    InvalidDimensions { rows: usize, cols: usize },
    /// Explicit cell access outside the board
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The playback runtime could not be built
    Runtime(std::io::Error),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions { rows, cols } => {
                write!(f, "invalid board dimensions {}x{}", rows, cols)
            }
            LifeError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "cell ({}, {}) is outside the {}x{} board",
                    row, col, rows, cols
                )
            }
            LifeError::Runtime(err) => write!(f, "playback runtime failed to start: {}", err),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Runtime(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for engine operations
pub type LifeResult<T> = Result<T, LifeError>;
