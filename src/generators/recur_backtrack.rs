use crate::{
    error::MazeError,
    generators::RandomSource,
    maze::{CellNeighbor, CellPosition, Maze},
};

/// Draw an index in `[0, len)` and make sure the source kept to its contract.
fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> Result<usize, MazeError> {
    let idx = rng.pick_below(len)?;
    if idx >= len {
        return Err(MazeError::RandomSource(format!(
            "picked {idx}, expected a value below {len}"
        )));
    }
    Ok(idx)
}

/// Carve a perfect maze with randomized depth-first backtracking.
///
/// The walk uses an explicit stack, so large mazes do not grow the call stack.
/// Draws happen in a fixed order: start `x`, start `y`, then one index per
/// carved passage. The same source state therefore always yields the same maze.
///
/// # Errors
/// * [`MazeError::InvalidDimension`] if `width` or `height` is zero, before any draw.
/// * Any error from `rng`, which aborts the walk; no partial maze is returned.
pub fn recursive_backtrack<R: RandomSource + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;

    // Initialize the starting point
    let start = CellPosition::new(
        pick_index(rng, width as usize)? as u16,
        pick_index(rng, height as usize)? as u16,
    );
    tracing::debug!("[generator] carving {width}x{height} maze from {start}");
    maze.mark_visited(start);

    // The stack keeps only visited cells
    let mut stack = vec![start];
    let mut carved = 0usize;

    while let Some(cell) = stack.pop() {
        let neighbors = maze.unvisited_neighbors(cell);
        if neighbors.is_empty() {
            continue;
        }

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);

        let CellNeighbor {
            position,
            shared_wall,
        } = neighbors[pick_index(rng, neighbors.len())?];
        let opposite = shared_wall
            .opposite()
            .ok_or(MazeError::UnpairedWall(shared_wall))?;

        maze.clear_wall(cell, shared_wall);
        maze.mark_visited(position);
        maze.clear_wall(position, opposite);
        tracing::trace!("[generator] opened {cell} -> {position}");
        carved += 1;

        // Carve on from the neighbor
        stack.push(position);
    }

    debug_assert_eq!(carved + 1, maze.cell_count());
    tracing::debug!("[generator] done, {carved} passages carved");
    Ok(maze)
}
