//! Perfect maze generation.
//!
//! A maze is a grid of cells, each holding a [`WallSide`] bitmask of the walls
//! still standing. [`generate_maze`] carves passages with randomized depth-first
//! backtracking until the passages form a spanning tree: every cell reachable
//! from every other along exactly one path.
//!
//! ```
//! use mazewalls::{CellPosition, WallSide, generate_maze};
//!
//! let maze = generate_maze(8, 5, Some(7)).unwrap();
//! assert_eq!(maze.passages().count(), 8 * 5 - 1);
//! assert!(maze.has_wall(CellPosition::new(0, 0), WallSide::LEFT));
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use generators::{RandomSource, generate_maze, get_rng, recursive_backtrack};
pub use maze::{CellNeighbor, CellPosition, Maze, WallSide};
