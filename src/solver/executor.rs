//! Solver orchestration and search statistics
//!
//! [`Solver`] owns the grid and everything retained between tiling
//! attempts: the last failed grid snapshot, the depth it reached, the
//! running statistics and the optional progress display. The region-digit
//! recursion itself lives in [`crate::solver::regions`].

use crate::grid::Grid;
use crate::io::configuration::WORK_BUDGET;
use crate::io::progress::SearchProgress;
use crate::puzzle::PuzzleDefinition;

/// Diagnostics accumulated over a full solve
#[derive(Clone, Debug)]
pub struct SearchStats {
    /// Tiling attempts actually run (short-circuited assignments excluded)
    pub attempts: usize,
    /// Deepest row validated by any attempt (−1 when none validated a row)
    pub best_max_row: i32,
    /// Region digits of the attempt that reached `best_max_row`
    pub best_assignment: Vec<u8>,
    /// Attempts abandoned because the work budget ran out
    ///
    /// When nonzero, an unsolved result is a truncated search rather than a
    /// proof that no solution exists.
    pub budget_exhausted_attempts: usize,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            attempts: 0,
            best_max_row: -1,
            best_assignment: Vec::new(),
            budget_exhausted_attempts: 0,
        }
    }
}

/// Two-level backtracking solver over one puzzle definition
///
/// Drives the region-digit assignment search and, per complete assignment,
/// one tiling attempt with a fresh attempt context.
pub struct Solver {
    pub(crate) definition: PuzzleDefinition,
    pub(crate) grid: Grid,
    pub(crate) budget: usize,
    pub(crate) last_failed: Option<Grid>,
    pub(crate) last_max_row: i32,
    pub(crate) stats: SearchStats,
    pub(crate) progress: Option<SearchProgress>,
}

impl Solver {
    /// Create a solver with the default work budget
    pub fn new(definition: PuzzleDefinition) -> Self {
        Self::with_budget(definition, WORK_BUDGET)
    }

    /// Create a solver with an explicit per-attempt work budget
    pub fn with_budget(definition: PuzzleDefinition, budget: usize) -> Self {
        let grid = Grid::new(definition.size(), definition.highlighted());
        Self {
            definition,
            grid,
            budget,
            last_failed: None,
            last_max_row: -1,
            stats: SearchStats::default(),
            progress: None,
        }
    }

    /// Show a progress line updated after every failed attempt
    pub fn enable_progress(&mut self) {
        self.progress = Some(SearchProgress::new());
    }

    /// Run the full search
    ///
    /// Returns whether a solution was found; on success the solved digits
    /// and tile positions are left on [`Self::grid`]. On failure consult
    /// [`Self::stats`] for the best assignment, the depth it reached and
    /// whether any attempt was cut off by the work budget.
    pub fn solve(&mut self) -> bool {
        let solved = self.assign_regions(0);
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        solved
    }

    /// The grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Diagnostics accumulated so far
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Current digit of every region, in region order
    pub fn assignment(&self) -> Vec<u8> {
        (0..self.definition.region_count())
            .map(|region| self.region_digit(region))
            .collect()
    }
}
