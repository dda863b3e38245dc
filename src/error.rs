use thiserror::Error;

use crate::grid::Point;

/// Errors raised by the maze core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: must be square, odd and within 5..=155")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {0} is out of bounds")]
    OutOfBounds(Point),
    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },
    #[error("maze generation failed validation after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, MazeError>;
