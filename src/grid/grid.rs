//! The square grid and its derived row views
//!
//! The grid owns every cell. Row numbers and signatures are derived on
//! demand and never stored, so they are always consistent with the current
//! digits and tile flags.

use ndarray::Array2;

use crate::grid::cell::Cell;

/// Square grid of cells with derived row views
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
    size: usize,
}

impl Grid {
    /// Create a grid of unfilled cells with the given highlighted positions
    pub fn new(size: usize, highlighted: &[(usize, usize)]) -> Self {
        let cells = Array2::from_shape_fn((size, size), |(row, col)| Cell::new(row, col, size));
        let mut grid = Self { cells, size };
        for &(row, col) in highlighted {
            if let Some(cell) = grid.cells.get_mut((row, col)) {
                cell.highlighted = true;
            }
        }
        grid
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Borrow a cell, if the coordinates are in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get((row, col))
    }

    /// Digit at a position (0 when out of bounds)
    pub fn digit(&self, row: usize, col: usize) -> u8 {
        self.cells.get((row, col)).map_or(0, |cell| cell.digit)
    }

    /// Overwrite the digit at a position
    pub fn set_digit(&mut self, row: usize, col: usize, digit: u8) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            cell.digit = digit;
        }
    }

    /// Whether a position carries a tile marker (false when out of bounds)
    pub fn is_tile(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).is_some_and(|cell| cell.tile)
    }

    /// Set or clear the tile marker at a position
    pub fn set_tile(&mut self, row: usize, col: usize, tile: bool) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            cell.tile = tile;
        }
    }

    /// Whether a position is highlighted (false when out of bounds)
    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.cells
            .get((row, col))
            .is_some_and(|cell| cell.highlighted)
    }

    /// Orthogonal in-bounds neighbours of a position
    pub fn neighbors(&self, row: usize, col: usize) -> &[(usize, usize)] {
        self.cells
            .get((row, col))
            .map_or(&[], |cell| cell.neighbors.as_slice())
    }

    /// Coordinates of the tiled cells of a row, left to right
    pub fn row_tiles(&self, row: usize) -> Vec<(usize, usize)> {
        (0..self.size)
            .filter(|&col| self.is_tile(row, col))
            .map(|col| (row, col))
            .collect()
    }

    /// Numbers formed by the row's non-tile digits, split at tile boundaries
    ///
    /// Scanning left to right, a tile ends the accumulating number (emitted
    /// if nonzero); trailing digits are emitted the same way. A leading tile
    /// contributes nothing.
    pub fn row_numbers(&self, row: usize) -> Vec<i64> {
        self.prefix_numbers(row, self.size)
    }

    /// Numbers formed by the columns `[0, end)` of a row
    ///
    /// Same extraction rule as [`Self::row_numbers`], with the prefix edge
    /// acting like the row edge: trailing accumulation is emitted if
    /// nonzero.
    pub fn prefix_numbers(&self, row: usize, end: usize) -> Vec<i64> {
        let mut numbers = Vec::new();
        let mut current = 0i64;
        for col in 0..end.min(self.size) {
            if let Some(cell) = self.cells.get((row, col)) {
                if cell.tile {
                    if current > 0 {
                        numbers.push(current);
                        current = 0;
                    }
                } else {
                    current = current * 10 + i64::from(cell.digit);
                }
            }
        }
        if current > 0 {
            numbers.push(current);
        }
        numbers
    }

    /// First number of a row, if the row forms any
    pub fn first_number(&self, row: usize) -> Option<i64> {
        self.row_numbers(row).first().copied()
    }

    /// Order-sensitive hash over the row's digit and tile-flag sequence
    ///
    /// Used as the memoization key for adjacent-row incompatibility.
    pub fn row_signature(&self, row: usize) -> u64 {
        let mut hash = 0u64;
        for col in 0..self.size {
            if let Some(cell) = self.cells.get((row, col)) {
                hash = hash
                    .wrapping_mul(31)
                    .wrapping_add(u64::from(cell.digit));
                hash = hash.wrapping_mul(31).wrapping_add(u64::from(cell.tile));
            }
        }
        hash
    }
}
