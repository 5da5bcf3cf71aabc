use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod recur_backtrack;

pub use recur_backtrack::recursive_backtrack;

use crate::{error::MazeError, maze::Maze};

/// Uniform integer draws used by the generator.
///
/// Every [`rand::Rng`] is a source. Implement it directly to script the draws or
/// to wrap a source that can fail.
pub trait RandomSource {
    /// Pick an integer uniformly from `range` (`[lo, hi)`).
    fn pick(&mut self, range: Range<usize>) -> Result<usize, MazeError>;

    /// Pick an integer uniformly from `[0, n)`.
    fn pick_below(&mut self, n: usize) -> Result<usize, MazeError> {
        self.pick(0..n)
    }
}

impl<R: Rng> RandomSource for R {
    fn pick(&mut self, range: Range<usize>) -> Result<usize, MazeError> {
        if range.is_empty() {
            return Err(MazeError::RandomSource(format!(
                "cannot pick from empty range {range:?}"
            )));
        }
        Ok(self.random_range(range))
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a perfect maze, seeded when `seed` is given.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    let mut rng = get_rng(seed);
    recursive_backtrack(width, height, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = get_rng(Some(7));
        for _ in 0..100 {
            let value = rng.pick(3..9).unwrap();
            assert!((3..9).contains(&value));
        }
        assert_eq!(rng.pick_below(1).unwrap(), 0);
    }

    #[test]
    fn test_rng_source_rejects_empty_range() {
        let mut rng = get_rng(Some(7));
        assert!(matches!(rng.pick_below(0), Err(MazeError::RandomSource(_))));
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate_maze(12, 9, Some(42)).unwrap();
        let second = generate_maze(12, 9, Some(42)).unwrap();
        assert_eq!(first, second);
    }
}
