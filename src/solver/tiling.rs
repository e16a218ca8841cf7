//! Tile placement search
//!
//! Backtracks over which cells of the current row become tiles. At every
//! column the untiled branch is explored first, then the tiled branch when
//! placement is structurally legal. Once a row's layout is fixed the search
//! hands off to the increment distribution; once every row is laid out the
//! final row is validated and success propagates all the way up.

use crate::grid::Grid;
use crate::solver::{SearchState, increment, validate};

/// Backtracking tile placement over `(row, col)` states
///
/// Returns whether a full solution was found downstream of this state. On
/// failure the grid is restored to the state it was passed in.
pub fn place_tiles(state: &mut SearchState<'_>, row: usize, col: usize) -> bool {
    if state.ctx.over_budget() {
        return false;
    }

    let size = state.grid.size();

    // Every row laid out: the grid is complete once the last row validates
    if row >= size {
        let Some(last) = size.checked_sub(1) else {
            return false;
        };
        return validate::validate_row(state.grid, state.clues, &state.used, last);
    }

    // Row layout fixed: redistribute the tiled cells' values
    if col >= size {
        let tiles = state.grid.row_tiles(row);
        return increment::distribute_row(state, row, &tiles, 0);
    }

    if place_tiles(state, row, col + 1) {
        return true;
    }

    if tile_allowed(state.grid, row, col) {
        state.grid.set_tile(row, col, true);
        if place_tiles(state, row, col + 1) {
            return true;
        }
        state.grid.set_tile(row, col, false);
    }

    false
}

/// Whether a tile may structurally be placed at `(row, col)`
///
/// A tile is forbidden on highlighted cells, on column 1 and the
/// second-to-last column (either would cut off a single-digit number),
/// within two cells after another tile in the same row, and directly
/// beneath a tile of the row above.
pub fn tile_allowed(grid: &Grid, row: usize, col: usize) -> bool {
    if grid.cell(row, col).is_none() {
        return false;
    }
    if grid.is_highlighted(row, col) {
        return false;
    }
    if col == 1 || grid.size().checked_sub(2) == Some(col) {
        return false;
    }
    if col > 1 && (grid.is_tile(row, col - 1) || grid.is_tile(row, col - 2)) {
        return false;
    }
    if row > 0 && grid.is_tile(row - 1, col) {
        return false;
    }
    true
}
