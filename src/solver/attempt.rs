//! Attempt-scoped cache and counters
//!
//! One [`AttemptContext`] lives exactly as long as one tiling attempt.
//! Constructing a fresh context for every attempt is what guarantees the
//! incompatibility cache and the work counter never leak between
//! independent region-digit assignments.

use std::collections::HashSet;

/// Cache and counters owned by a single tiling attempt
#[derive(Debug)]
pub struct AttemptContext {
    /// Adjacent-row signature pairs proven unable to coexist
    incompatible: HashSet<(u64, u64)>,
    work: usize,
    budget: usize,
    max_row: i32,
    budget_exhausted: bool,
}

impl AttemptContext {
    /// Create a fresh context with the given work budget
    pub fn new(budget: usize) -> Self {
        Self {
            incompatible: HashSet::new(),
            work: 0,
            budget,
            max_row: -1,
            budget_exhausted: false,
        }
    }

    /// Whether the attempt has spent its work budget
    ///
    /// Latches the exhaustion flag on first overrun so callers can tell a
    /// truncated search from a proven-exhaustive one after the fact.
    pub fn over_budget(&mut self) -> bool {
        if self.work > self.budget {
            self.budget_exhausted = true;
            true
        } else {
            false
        }
    }

    /// Record a successfully validated row
    ///
    /// Advances the high-water mark and charges one unit of work.
    pub fn record_valid_row(&mut self, row: usize) {
        self.max_row = self.max_row.max(row as i32);
        self.work += 1;
    }

    /// Highest row index validated so far (−1 before any)
    pub const fn max_row(&self) -> i32 {
        self.max_row
    }

    /// Whether the work budget was hit during this attempt
    pub const fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Whether a signature pair is known to be incompatible
    pub fn is_incompatible(&self, pair: (u64, u64)) -> bool {
        self.incompatible.contains(&pair)
    }

    /// Record a signature pair as incompatible
    pub fn mark_incompatible(&mut self, pair: (u64, u64)) {
        self.incompatible.insert(pair);
    }

    /// Number of cached incompatible pairs
    pub fn cached_pairs(&self) -> usize {
        self.incompatible.len()
    }
}
