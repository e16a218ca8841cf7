//! The two-level backtracking search core
//!
//! Level one assigns a digit to every region under the dependency
//! constraints ([`regions`], driven by [`executor::Solver`]). Level two is
//! one *tiling attempt* per complete assignment: [`tiling`] backtracks over
//! tile placement within a row and [`increment`] backtracks over how each
//! tile's value is redistributed onto its neighbours, with [`validate`] as
//! the shared correctness oracle and [`attempt::AttemptContext`] carrying
//! the attempt-scoped failure cache and work counter.

/// Attempt-scoped cache and counters
pub mod attempt;
/// Solver orchestration and search statistics
pub mod executor;
/// Increment distribution search
pub mod increment;
/// Region-digit assignment search
pub mod regions;
/// Tile placement search
pub mod tiling;
/// Row and row-prefix validation
pub mod validate;

use std::collections::HashSet;

use crate::grid::Grid;
use crate::puzzle::Clue;

pub use attempt::AttemptContext;
pub use executor::{SearchStats, Solver};

/// Mutable state threaded through one tiling attempt
///
/// The grid is restored by explicit undo on every backtrack edge; the
/// used-numbers set follows an insert-on-commit / remove-on-backtrack
/// discipline; the context persists across sibling branches of the same
/// attempt by design and is rebuilt for the next attempt.
pub struct SearchState<'a> {
    /// The grid being tiled and incremented
    pub grid: &'a mut Grid,
    /// Per-row clue predicates
    pub clues: &'a [Clue],
    /// Numbers committed by validated rows above the search frontier
    pub used: HashSet<i64>,
    /// Attempt-scoped incompatibility cache and work counter
    pub ctx: &'a mut AttemptContext,
}
