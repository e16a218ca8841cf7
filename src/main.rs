//! CLI entry point for the number-cross solver

use clap::Parser;
use numbercross::io::cli::{Cli, SolveRunner};

fn main() -> numbercross::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run()
}
