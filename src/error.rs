use thiserror::Error;

use crate::maze::WallSide;

/// Everything that can stop a maze from being built or drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs at least one cell on each side.
    #[error("invalid maze dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: u16, height: u16 },
    /// The random source failed or handed back a value outside the requested range.
    #[error("random source failed: {0}")]
    RandomSource(String),
    /// The opposite-wall mapping only accepts a single directional side.
    #[error("{0:?} is not a single wall side")]
    UnpairedWall(WallSide),
    /// The text canvas for this maze does not fit in a `u16` grid.
    #[error("canvas of {width}x{height} blocks is too large to draw")]
    CanvasTooLarge { width: u32, height: u32 },
}
