//! Region-digit assignment search
//!
//! Backtracks over the regions in index order, trying digits 1–9 for each
//! unassigned region and skipping any value already held by one of its
//! dependencies. Every complete assignment triggers one tiling attempt —
//! unless the observable digit prefix of the early rows is unchanged since
//! the previous failed attempt, in which case the assignment is known to
//! fail without retrying.

use std::collections::HashSet;

use crate::io::configuration::MAX_DIGIT;
use crate::solver::executor::Solver;
use crate::solver::{AttemptContext, SearchState, tiling};

impl Solver {
    /// Backtracking digit assignment from `region` onwards
    pub(crate) fn assign_regions(&mut self, region: usize) -> bool {
        if region >= self.definition.region_count() {
            return self.complete_assignment();
        }

        // A region already holding a digit is left untouched
        if self.region_digit(region) != 0 {
            return self.assign_regions(region + 1);
        }

        for value in 1..=MAX_DIGIT {
            let conflict = self
                .definition
                .dependencies_of(region)
                .iter()
                .any(|&dep| self.region_digit(dep) == value);
            if conflict {
                continue;
            }
            self.fill_region(region, value);
            if self.assign_regions(region + 1) {
                return true;
            }
        }

        self.fill_region(region, 0);
        false
    }

    /// Digit currently held by a region, read from its first coordinate
    pub(crate) fn region_digit(&self, region: usize) -> u8 {
        self.definition
            .region(region)
            .first()
            .map_or(0, |&(row, col)| self.grid.digit(row, col))
    }

    /// Write `digit` to every coordinate of a region
    fn fill_region(&mut self, region: usize, digit: u8) {
        let Self {
            definition, grid, ..
        } = self;
        for &(row, col) in definition.region(region) {
            grid.set_digit(row, col, digit);
        }
    }

    /// All regions assigned: run one tiling attempt unless it is known to
    /// fail
    fn complete_assignment(&mut self) -> bool {
        if self.known_to_fail() {
            return false;
        }

        self.stats.attempts += 1;
        let mut ctx = AttemptContext::new(self.budget);
        let solved = {
            let mut state = SearchState {
                grid: &mut self.grid,
                clues: self.definition.clues(),
                used: HashSet::new(),
                ctx: &mut ctx,
            };
            tiling::place_tiles(&mut state, 0, 0)
        };
        self.last_max_row = ctx.max_row();

        if solved {
            return true;
        }

        if ctx.max_row() > self.stats.best_max_row || self.stats.best_assignment.is_empty() {
            self.stats.best_max_row = ctx.max_row();
            self.stats.best_assignment = self.assignment();
        }
        if ctx.budget_exhausted() {
            self.stats.budget_exhausted_attempts += 1;
        }
        self.last_failed = Some(self.grid.clone());

        if let Some(progress) = &self.progress {
            progress.record_attempt(self.stats.attempts, &self.assignment(), ctx.max_row());
        }

        false
    }

    /// Whether this assignment is observably identical to the previous
    /// failed one
    ///
    /// Compares the first number of every row up to two past the depth the
    /// previous attempt reached. If none of those changed, re-running the
    /// tiling attempt would replay the same failure.
    fn known_to_fail(&self) -> bool {
        let Some(last) = &self.last_failed else {
            return false;
        };
        let reach = usize::try_from((self.last_max_row + 2).max(0)).unwrap_or(0);
        let limit = reach.min(self.grid.size().saturating_sub(1));
        (0..=limit).all(|row| last.first_number(row) == self.grid.first_number(row))
    }
}
