mod layout;

use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

pub use layout::{Orientation, WallSegment, floor_extent, wall_segments};

use crate::{
    error::MazeError,
    maze::{CellPosition, Grid, Maze, WallSide},
};

/// One unit of the text canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Wall,
    Floor,
}

impl Block {
    /// The width of each block when rendered, in character widths.
    pub const WIDTH: usize = 2;

    pub fn glyph(self) -> &'static str {
        match self {
            Block::Wall => "██",
            Block::Floor => "  ",
        }
    }

    fn color(self) -> Color {
        match self {
            Block::Wall => Color::White,
            Block::Floor => Color::Reset,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.glyph().with(self.color());

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Block::WIDTH,
                "Each block must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Draws a maze as a grid of [`Block`]s for the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Floor blocks per cell along each axis
    hallway_size: u16,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { hallway_size: 1 }
    }
}

impl TextRenderer {
    pub fn new(hallway_size: u16) -> Self {
        Self {
            hallway_size: hallway_size.max(1),
        }
    }

    pub fn hallway_size(&self) -> u16 {
        self.hallway_size
    }

    /// Lay the maze out as blocks. Row 0 of the canvas is the bottom edge (`y = 0`).
    ///
    /// Each cell draws its UP and LEFT walls; the outer RIGHT and DOWN edges are
    /// always closed. Corner pillars are always walls.
    pub fn canvas(&self, maze: &Maze) -> Result<Grid<Block>, MazeError> {
        let stride = u32::from(self.hallway_size) + 1;
        let canvas_width = u32::from(maze.width()) * stride + 1;
        let canvas_height = u32::from(maze.height()) * stride + 1;
        let (Ok(width), Ok(height)) = (u16::try_from(canvas_width), u16::try_from(canvas_height))
        else {
            return Err(MazeError::CanvasTooLarge {
                width: canvas_width,
                height: canvas_height,
            });
        };

        let mut canvas = Grid::new(width, height, Block::Floor);
        let stride = stride as u16;
        let hallway = 1..=self.hallway_size;

        for y in (0..height).step_by(stride as usize) {
            for x in (0..width).step_by(stride as usize) {
                canvas[(x, y)] = Block::Wall;
            }
        }

        for pos in maze.positions() {
            let CellPosition { x, y } = pos;
            let (bx, by) = (x * stride, y * stride);
            let last_column = x + 1 == maze.width();

            if maze.has_wall(pos, WallSide::UP) {
                hallway.clone().for_each(|i| canvas[(bx + i, by + stride)] = Block::Wall);
            }
            if maze.has_wall(pos, WallSide::LEFT) {
                hallway.clone().for_each(|i| canvas[(bx, by + i)] = Block::Wall);
            }
            if last_column {
                hallway.clone().for_each(|i| canvas[(bx + stride, by + i)] = Block::Wall);
            }
            if y == 0 {
                hallway.clone().for_each(|i| canvas[(bx + i, by)] = Block::Wall);
            }
        }
        Ok(canvas)
    }

    /// Unstyled lines of the canvas, top row first.
    pub fn lines(&self, maze: &Maze) -> Result<Vec<String>, MazeError> {
        let canvas = self.canvas(maze)?;
        Ok((0..canvas.height())
            .rev()
            .map(|y| {
                (0..canvas.width())
                    .map(|x| canvas[(x, y)].glyph())
                    .collect::<String>()
            })
            .collect())
    }

    /// Writes the styled canvas to `out`, top row first.
    pub fn render<W: Write>(&self, maze: &Maze, out: &mut W) -> std::io::Result<()> {
        let canvas = self.canvas(maze).map_err(std::io::Error::other)?;
        tracing::debug!(
            "[render] drawing {}x{} maze on a {}x{} canvas",
            maze.width(),
            maze.height(),
            canvas.width(),
            canvas.height()
        );
        for y in (0..canvas.height()).rev() {
            for x in 0..canvas.width() {
                queue!(out, style::Print(canvas[(x, y)]))?;
            }
            queue!(out, style::Print("\n"))?;
        }
        out.flush()
    }
}
