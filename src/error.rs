use thiserror::Error;

use crate::maze::{Location, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A location that does not address a cell of the grid, with the wall
    /// side when the failing call was about a wall.
    #[error("location {location:?} is out of range (side {side:?})")]
    OutOfRange {
        location: Location,
        side: Option<Side>,
    },
    /// A raw side value outside the four known sides.
    #[error("unknown side: {0}")]
    UnknownSide(u8),
    #[error("invalid grid dimensions {col_count}x{row_count}, both must be at least 1")]
    InvalidDimensions { col_count: u16, row_count: u16 },
    /// The animation was abandoned by its host.
    #[error("animation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, MazeError>;
