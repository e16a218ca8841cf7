//! Search progress display
//!
//! A single spinner line updated once per failed tiling attempt, showing
//! the attempt count, the digit assignment that failed and how deep its
//! tiling search got.

use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress line for a running solve
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a ticking progress line
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Report a failed tiling attempt
    pub fn record_attempt(&self, attempts: usize, assignment: &[u8], max_row: i32) {
        let digits = assignment
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.bar.set_message(format!(
            "attempt {attempts}: digits [{digits}] failed at row {max_row}"
        ));
    }

    /// Remove the progress line
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
