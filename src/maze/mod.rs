pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::WallSide;
pub use grid::Grid;

use crate::error::MazeError;

/// Coordinate of a cell. `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    pub x: u16,
    pub y: u16,
}

impl CellPosition {
    pub const fn new(x: u16, y: u16) -> Self {
        CellPosition { x, y }
    }

    /// The cell across `side` from this one, if it lies inside a `width` x `height` grid.
    ///
    /// `side` must be a single directional side; anything else has no neighbor.
    pub fn neighbor(self, side: WallSide, width: u16, height: u16) -> Option<CellPosition> {
        let (x, y) = (self.x, self.y);
        let coord = if side == WallSide::LEFT {
            (x.checked_sub(1)?, y)
        } else if side == WallSide::RIGHT {
            (x.checked_add(1).filter(|&nx| nx < width)?, y)
        } else if side == WallSide::UP {
            (x, y.checked_add(1).filter(|&ny| ny < height)?)
        } else if side == WallSide::DOWN {
            (x, y.checked_sub(1)?)
        } else {
            return None;
        };
        Some(coord.into())
    }
}

impl From<(u16, u16)> for CellPosition {
    fn from((x, y): (u16, u16)) -> Self {
        CellPosition { x, y }
    }
}

impl From<CellPosition> for (u16, u16) {
    fn from(pos: CellPosition) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A neighboring cell together with the wall of the current cell that faces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellNeighbor {
    pub position: CellPosition,
    pub shared_wall: WallSide,
}

/// A rectangular maze stored as one [`WallSide`] per cell.
///
/// Only the generator mutates a maze. Everything handed out to callers is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<WallSide>,
}

impl Maze {
    /// Creates a fully walled maze with no visited cells.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width, height, WallSide::ALL_WALLS),
        })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, pos: CellPosition) -> bool {
        self.grid.is_in_bounds(pos.into())
    }

    /// Raw cell state, `VISITED` bit included.
    pub fn cell(&self, pos: CellPosition) -> Option<WallSide> {
        self.grid.get(pos.into())
    }

    /// The walls still standing around a cell.
    pub fn walls(&self, pos: CellPosition) -> Option<WallSide> {
        self.cell(pos).map(WallSide::walls)
    }

    /// Checks whether `side` of the cell still has a wall.
    ///
    /// # Panics
    /// If `pos` is out of bounds.
    pub fn has_wall(&self, pos: CellPosition, side: WallSide) -> bool {
        self.grid[(pos.x, pos.y)].walls().contains(side)
    }

    /// # Panics
    /// If `pos` is out of bounds.
    pub fn is_visited(&self, pos: CellPosition) -> bool {
        self.grid[(pos.x, pos.y)].is_visited()
    }

    /// All cell positions, row by row from the bottom.
    pub fn positions(&self) -> impl Iterator<Item = CellPosition> + '_ {
        self.grid.iter().map(|(coord, _)| coord.into())
    }

    /// Get the in-bounds neighbors of a cell that have not been visited yet.
    ///
    /// Candidates are checked LEFT, RIGHT, UP, DOWN; the order of the returned
    /// list follows that order. Out-of-bounds cells have no neighbors.
    pub fn unvisited_neighbors(&self, pos: CellPosition) -> Vec<CellNeighbor> {
        if !self.is_in_bounds(pos) {
            return Vec::new();
        }
        let (width, height) = (self.width(), self.height());
        WallSide::SIDES
            .into_iter()
            .filter_map(|side| {
                pos.neighbor(side, width, height)
                    .map(|position| CellNeighbor {
                        position,
                        shared_wall: side,
                    })
            })
            .filter(|neighbor| !self.is_visited(neighbor.position))
            .collect()
    }

    /// Every open passage between two cells, each reported once.
    ///
    /// The second position always lies to the RIGHT of or UP from the first.
    pub fn passages(&self) -> impl Iterator<Item = (CellPosition, CellPosition)> + '_ {
        let (width, height) = (self.width(), self.height());
        self.grid.iter().flat_map(move |(coord, state)| {
            let here = CellPosition::from(coord);
            [WallSide::RIGHT, WallSide::UP]
                .into_iter()
                .filter(move |&side| !state.contains(side))
                .filter_map(move |side| {
                    here.neighbor(side, width, height).map(|there| (here, there))
                })
        })
    }

    pub(crate) fn mark_visited(&mut self, pos: CellPosition) {
        self.grid[(pos.x, pos.y)].insert(WallSide::VISITED);
    }

    /// Clears one wall bit. `VISITED` is left as it was.
    pub(crate) fn clear_wall(&mut self, pos: CellPosition, side: WallSide) {
        debug_assert!(!side.contains(WallSide::VISITED));
        self.grid[(pos.x, pos.y)].remove(side.walls());
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = WallSide;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}
