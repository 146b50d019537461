// grid.rs - Board storage for Conway's Game of Life

use crate::error::{LifeError, LifeResult};

/// Offsets of the eight grid-adjacent cells.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size rectangular board of cell liveness. Row-major flat storage,
/// dimensions set at construction. Cells outside the board read as dead and
/// never wrap.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a board with every cell dead.
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        })
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Liveness of the cell at (row, col). Out-of-bounds coordinates are
    /// dead, so neighbor counting needs no special casing at the edges.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[row * self.cols + col]
    }

    /// Sets the cell at (row, col) alive or dead.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<()> {
        if !self.in_bounds(row, col) {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.set(row, col, alive);
        Ok(())
    }

    /// In-bounds write without the coordinate check.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.idx(row, col);
        self.cells[i] = alive;
    }

    /// Flips the cell at (row, col) and returns its new liveness.
    pub fn toggle(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        let alive = !self.is_alive(row, col);
        self.set_alive(row, col, alive)?;
        Ok(alive)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Visits every cell in row-major order (row ascending, then column
    /// ascending).
    pub fn for_each_cell(&self, mut visitor: impl FnMut(usize, usize, bool)) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                visitor(row, col, self.cells[row * self.cols + col]);
            }
        }
    }

    /// Number of live cells on the board.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells among the up-to-8 neighbors of (row, col). Off-board
    /// positions contribute nothing.
    pub(crate) fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_alive(r, c) {
                count += 1;
            }
        }
        count
    }
}
