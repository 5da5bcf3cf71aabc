use std::collections::VecDeque;

use mazewalls::{CellPosition, Maze, MazeError, WallSide, generate_maze, get_rng, recursive_backtrack};
use proptest::prelude::*;

/// Cells reachable from the origin by walking through open walls.
fn reachable_cells(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.cell_count()];
    let index = |pos: CellPosition| pos.y as usize * maze.width() as usize + pos.x as usize;
    let origin = CellPosition::new(0, 0);
    seen[index(origin)] = true;
    let mut queue = VecDeque::from([origin]);
    let mut count = 0;

    while let Some(pos) = queue.pop_front() {
        count += 1;
        for side in WallSide::SIDES {
            if maze.has_wall(pos, side) {
                continue;
            }
            let Some(next) = pos.neighbor(side, maze.width(), maze.height()) else {
                continue;
            };
            if !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    count
}

fn assert_symmetric(maze: &Maze) {
    for pos in maze.positions() {
        for side in WallSide::SIDES {
            match pos.neighbor(side, maze.width(), maze.height()) {
                Some(next) => assert_eq!(
                    maze.has_wall(pos, side),
                    maze.has_wall(next, side.opposite().unwrap()),
                    "asymmetric wall between {pos} and {next}"
                ),
                None => assert!(maze.has_wall(pos, side), "outer wall of {pos} was opened"),
            }
        }
    }
}

proptest! {
    #[test]
    fn generated_mazes_are_spanning_trees(width in 1u16..24, height in 1u16..24, seed in any::<u64>()) {
        let maze = generate_maze(width, height, Some(seed)).unwrap();
        let cells = width as usize * height as usize;
        // n - 1 edges plus connectivity means no cycles
        prop_assert_eq!(maze.passages().count(), cells - 1);
        prop_assert_eq!(reachable_cells(&maze), cells);
    }

    #[test]
    fn walls_are_symmetric_and_cells_visited(width in 1u16..24, height in 1u16..24, seed in any::<u64>()) {
        let maze = generate_maze(width, height, Some(seed)).unwrap();
        assert_symmetric(&maze);
        prop_assert!(maze.positions().all(|pos| maze.is_visited(pos)));
    }

    #[test]
    fn same_seed_same_maze(width in 1u16..16, height in 1u16..16, seed in any::<u64>()) {
        let first = generate_maze(width, height, Some(seed)).unwrap();
        let second = generate_maze(width, height, Some(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_zero_dimensions_are_rejected() {
    let mut rng = get_rng(Some(1));
    for (width, height) in [(0, 0), (0, 4), (4, 0)] {
        assert_eq!(
            recursive_backtrack(width, height, &mut rng),
            Err(MazeError::InvalidDimension { width, height })
        );
    }
}

#[test]
fn test_large_maze_does_not_overflow_the_stack() {
    // A long corridor forces the walk depth up to the number of cells
    let maze = generate_maze(u16::MAX, 2, Some(3)).unwrap();
    assert_eq!(maze.passages().count(), u16::MAX as usize * 2 - 1);
    assert_eq!(reachable_cells(&maze), maze.cell_count());
}

#[test]
fn test_unseeded_mazes_are_still_perfect() {
    let maze = generate_maze(17, 13, None).unwrap();
    assert_eq!(maze.passages().count(), 17 * 13 - 1);
    assert_symmetric(&maze);
}

#[test]
fn test_works_through_trait_object() {
    let mut rng = get_rng(Some(8));
    let source: &mut dyn mazewalls::RandomSource = &mut rng;
    let maze = recursive_backtrack(6, 6, source).unwrap();
    assert_eq!(maze, generate_maze(6, 6, Some(8)).unwrap());
}
