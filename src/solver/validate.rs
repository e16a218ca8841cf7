//! Row and row-prefix validation
//!
//! The shared correctness oracle of both search levels. A row is valid when
//! its extracted numbers are pairwise distinct, each satisfies the row's
//! clue, and none has been committed by an earlier row.

use std::collections::HashSet;

use crate::grid::Grid;
use crate::puzzle::Clue;

/// Validate a whole row against its clue and the committed numbers
pub fn validate_row(grid: &Grid, clues: &[Clue], used: &HashSet<i64>, row: usize) -> bool {
    check_numbers(&grid.row_numbers(row), clues.get(row).copied(), used)
}

/// Validate the completed prefix of a row while increments are in flight
///
/// Increments applied around column `col` of the row below can still change
/// cells to the right of `col`, so only numbers terminated by a tile at or
/// before `col + 1` are final. The boundary walks left from
/// `min(col + 1, size - 1)` until it meets a tile or leaves the interval
/// `(1, size - 1)`; a boundary at or below 1 means no complete number has
/// formed yet and the prefix is vacuously valid.
pub fn validate_row_prefix(
    grid: &Grid,
    clues: &[Clue],
    used: &HashSet<i64>,
    row: usize,
    col: usize,
) -> bool {
    let size = grid.size();
    if size == 0 {
        return true;
    }
    let mut edge = (col + 1).min(size - 1);
    while edge > 1 && edge < size - 1 && !grid.is_tile(row, edge) {
        edge -= 1;
    }
    if edge <= 1 {
        return true;
    }
    check_numbers(&grid.prefix_numbers(row, edge), clues.get(row).copied(), used)
}

fn check_numbers(numbers: &[i64], clue: Option<Clue>, used: &HashSet<i64>) -> bool {
    let Some(clue) = clue else {
        return false;
    };
    let mut seen = HashSet::with_capacity(numbers.len());
    for &number in numbers {
        if !seen.insert(number) {
            return false;
        }
    }
    numbers
        .iter()
        .all(|number| clue.accepts(*number) && !used.contains(number))
}
