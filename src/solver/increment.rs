//! Increment distribution search
//!
//! For a fixed row layout, each tile donates its digit value to be
//! redistributed as non-negative increments onto its untiled, unhighlighted
//! orthogonal neighbours, capping every receiving digit at 9. Tiles are
//! processed left to right; after each tile the completed prefix of the row
//! above is validated, and after the whole row the row above is validated in
//! full, its numbers committed, and the search advances to the next row
//! under the incompatibility cache.

use std::collections::HashSet;

use crate::io::configuration::MAX_DIGIT;
use crate::solver::{SearchState, tiling, validate};

/// Distribute the values of a row's tiles, one tile at a time
///
/// `tiles` holds the tiled coordinates of `row` in column order; `index` is
/// the tile currently being distributed. Returns whether a full solution was
/// found downstream. On failure the grid and the used-numbers set are
/// restored.
pub fn distribute_row(
    state: &mut SearchState<'_>,
    row: usize,
    tiles: &[(usize, usize)],
    index: usize,
) -> bool {
    if state.ctx.over_budget() {
        return false;
    }

    if index >= tiles.len() {
        return advance_row(state, row);
    }

    let Some(&(tile_row, tile_col)) = tiles.get(index) else {
        return false;
    };
    let donated = state.grid.digit(tile_row, tile_col);
    let neighbors: Vec<(usize, usize)> = state
        .grid
        .neighbors(tile_row, tile_col)
        .iter()
        .filter(|&&(r, c)| !state.grid.is_tile(r, c) && !state.grid.is_highlighted(r, c))
        .copied()
        .collect();

    // A tile with no cell to receive its value just passes through
    if neighbors.is_empty() {
        return distribute_row(state, row, tiles, index + 1);
    }

    distribute_tile(state, row, tiles, index, &neighbors, 0, donated)
}

/// Enumerate the compositions of `remaining` over the tile's neighbours
///
/// Tries increments in increasing order at each neighbour, restoring the
/// digit after every failed branch. When all neighbours are assigned the
/// donation must be spent exactly; the completed prefix of the row above is
/// then validated before the next tile is attempted.
fn distribute_tile(
    state: &mut SearchState<'_>,
    row: usize,
    tiles: &[(usize, usize)],
    index: usize,
    neighbors: &[(usize, usize)],
    position: usize,
    remaining: u8,
) -> bool {
    if position >= neighbors.len() {
        if remaining != 0 {
            return false;
        }
        if row > 0 {
            let Some(&(_, tile_col)) = tiles.get(index) else {
                return false;
            };
            if !validate::validate_row_prefix(state.grid, state.clues, &state.used, row - 1, tile_col)
            {
                return false;
            }
        }
        return distribute_row(state, row, tiles, index + 1);
    }

    let Some(&(neighbor_row, neighbor_col)) = neighbors.get(position) else {
        return false;
    };
    let original = state.grid.digit(neighbor_row, neighbor_col);
    let ceiling = remaining.min(MAX_DIGIT.saturating_sub(original));
    for value in 0..=ceiling {
        state.grid.set_digit(neighbor_row, neighbor_col, original + value);
        if distribute_tile(
            state,
            row,
            tiles,
            index,
            neighbors,
            position + 1,
            remaining - value,
        ) {
            return true;
        }
    }
    state.grid.set_digit(neighbor_row, neighbor_col, original);
    false
}

/// All tiles of `row` distributed: validate the row above, commit its
/// numbers and move on to tiling the next row
fn advance_row(state: &mut SearchState<'_>, row: usize) -> bool {
    // Row 0 has no predecessor to validate
    if row == 0 {
        return tiling::place_tiles(state, 1, 0);
    }

    let prev = row - 1;
    if !validate::validate_row(state.grid, state.clues, &state.used, prev) {
        return false;
    }
    state.ctx.record_valid_row(prev);

    let numbers = state.grid.row_numbers(prev);
    for &number in &numbers {
        state.used.insert(number);
    }

    let last = state.grid.size().saturating_sub(1);
    if row < last {
        let pair = (
            state.grid.row_signature(row),
            state.grid.row_signature(row + 1),
        );
        if state.ctx.is_incompatible(pair) {
            retract(&mut state.used, &numbers);
            return false;
        }
        if tiling::place_tiles(state, row + 1, 0) {
            return true;
        }
        state.ctx.mark_incompatible(pair);
        retract(&mut state.used, &numbers);
        false
    } else {
        // Final row transition: the pairwise cache cannot model it
        if tiling::place_tiles(state, row + 1, 0) {
            return true;
        }
        retract(&mut state.used, &numbers);
        false
    }
}

fn retract(used: &mut HashSet<i64>, numbers: &[i64]) {
    for number in numbers {
        used.remove(number);
    }
}
