use crate::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i16,
        y: i16,
        width: u16,
        height: u16,
    },

    #[error("grid must have a non-zero width and height")]
    EmptyGrid,

    #[error("cell ({x}, {y}) has level {level}, expected at most {max}")]
    InvalidCell { x: i16, y: i16, level: u8, max: u8 },

    #[error("invalid snake: {0}")]
    InvalidSnake(String),

    /// Raised by `Snake::advance`. The move generator filters candidates
    /// before advancing, so the route solver never returns this.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
