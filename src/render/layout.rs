//! Wall geometry for scene builders that place one wall piece per segment.

use std::fmt;

use crate::maze::{CellPosition, Maze, WallSide};

/// Extra length added to every segment so neighbouring pieces meet at the corners.
const WALL_OVERLAP: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs along the x axis (UP and DOWN walls).
    Horizontal,
    /// Runs along the y axis (LEFT and RIGHT walls).
    Vertical,
}

/// A straight wall piece, positioned by its center on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub center: (f32, f32),
    pub length: f32,
    pub orientation: Orientation,
}

impl fmt::Display for WallSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orientation = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(
            f,
            "{orientation} {:.2} {:.2} {:.2}",
            self.center.0, self.center.1, self.length
        )
    }
}

/// Size of the floor under the maze as `(width, depth)`.
pub fn floor_extent(maze: &Maze, hallway_size: f32) -> (f32, f32) {
    (
        f32::from(maze.width()) * hallway_size,
        f32::from(maze.height()) * hallway_size,
    )
}

/// Segments for every wall a scene should place, with the maze centered on the origin.
///
/// Same drawing rule as the text renderer: UP and LEFT walls per cell, the RIGHT
/// wall on the last column, the DOWN wall on the first row.
pub fn wall_segments(maze: &Maze, hallway_size: f32) -> Vec<WallSegment> {
    let (floor_width, floor_depth) = floor_extent(maze, hallway_size);
    let half = hallway_size / 2.0;
    let length = hallway_size + WALL_OVERLAP;
    let cell_center = |pos: CellPosition| {
        (
            -floor_width / 2.0 + half + f32::from(pos.x) * hallway_size,
            -floor_depth / 2.0 + half + f32::from(pos.y) * hallway_size,
        )
    };

    let mut segments = Vec::new();
    for pos in maze.positions() {
        let (cx, cy) = cell_center(pos);
        let mut place = |center, orientation| {
            segments.push(WallSegment {
                center,
                length,
                orientation,
            })
        };

        if maze.has_wall(pos, WallSide::UP) {
            place((cx, cy + half), Orientation::Horizontal);
        }
        if maze.has_wall(pos, WallSide::LEFT) {
            place((cx - half, cy), Orientation::Vertical);
        }
        if pos.x + 1 == maze.width() && maze.has_wall(pos, WallSide::RIGHT) {
            place((cx + half, cy), Orientation::Vertical);
        }
        if pos.y == 0 {
            place((cx, cy - half), Orientation::Horizontal);
        }
    }
    tracing::debug!("[render] laid out {} wall segments", segments.len());
    segments
}
