/// Flat row-major storage addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: u16, height: u16, cell: T) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Bounds-checked read.
    pub fn get(&self, coord: (u16, u16)) -> Option<T> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    pub fn set(&mut self, coord: (u16, u16), cell: T) {
        self[coord] = cell;
    }

    /// Every cell with its coordinate, row by row starting at `y = 0`.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), T)> + '_ {
        let width = self.width as usize;
        self.data.iter().enumerate().map(move |(idx, &cell)| {
            (((idx % width) as u16, (idx / width) as u16), cell)
        })
    }
}

impl<T: Copy> std::ops::Index<(u16, u16)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {index:?} is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl<T: Copy> std::ops::IndexMut<(u16, u16)> for Grid<T> {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        assert!(
            self.is_in_bounds(index),
            "coordinate {index:?} is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(4, 3, 0u8);
        grid[(3, 2)] = 7;
        grid.set((1, 0), 5);
        assert_eq!(grid[(3, 2)], 7);
        assert_eq!(grid.get((1, 0)), Some(5));
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(4, 3, 0u8);
        assert_eq!(grid.get((4, 0)), None);
        assert_eq!(grid.get((0, 3)), None);
        assert!(grid.is_in_bounds((3, 2)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_outside_row() {
        // (4, 0) would alias (0, 1) in the flat array without the bounds check
        let grid = Grid::new(4, 3, 0u8);
        let _ = grid[(4, 0)];
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::new(2, 2, ());
        let coords = grid.iter().map(|(coord, _)| coord).collect::<Vec<_>>();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }
}
