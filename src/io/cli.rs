//! Command-line interface for solving the embedded puzzle

use crate::io::configuration::WORK_BUDGET;
use crate::io::error::{Result, invalid_parameter};
use crate::io::render::render_grid;
use crate::puzzle::PuzzleDefinition;
use crate::solver::Solver;
use clap::Parser;

#[derive(Parser)]
#[command(name = "numbercross")]
#[command(
    author,
    version,
    about = "Solve the embedded number-cross puzzle by backtracking search"
)]
/// Command-line arguments for the solver binary
pub struct Cli {
    /// Work budget for each tiling attempt
    #[arg(short, long, default_value_t = WORK_BUDGET)]
    pub budget: usize,

    /// Suppress the progress line
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable ANSI colours in the rendered grid
    #[arg(short, long)]
    pub plain: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one solve according to the CLI arguments
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the embedded puzzle and report the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the work budget is zero.
    pub fn run(&self) -> Result<()> {
        if self.cli.budget == 0 {
            return Err(invalid_parameter(
                "budget",
                &self.cli.budget,
                &"must be greater than zero",
            ));
        }

        let definition = PuzzleDefinition::standard();
        let mut solver = Solver::with_budget(definition, self.cli.budget);
        if self.cli.should_show_progress() {
            solver.enable_progress();
        }

        let solved = solver.solve();
        self.report(&solver, solved);
        Ok(())
    }

    // Reporting is the one place the binary talks to stdout
    #[allow(clippy::print_stdout)]
    fn report(&self, solver: &Solver, solved: bool) {
        if solved {
            println!("{}", render_grid(solver.grid(), !self.cli.plain));
            println!("solution found");
            return;
        }

        let stats = solver.stats();
        let digits = stats
            .best_assignment
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("no solution after {} attempts", stats.attempts);
        println!(
            "best assignment [{digits}] reached row {}",
            stats.best_max_row
        );
        if stats.budget_exhausted_attempts > 0 {
            println!(
                "{} attempts hit the work budget; the search was not exhaustive",
                stats.budget_exhausted_attempts
            );
        }
    }
}
