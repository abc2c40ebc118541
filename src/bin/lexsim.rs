//! Command-line entry point for rust-lexsim.

use anyhow::Result;
use clap::Parser;
use rust_lexsim::cli::{cmd_lines, cmd_similarity, init_tracing, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Lines(args) => cmd_lines(args)?,
        Command::Similarity(args) => cmd_similarity(args)?,
    }

    Ok(())
}
