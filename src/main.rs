//! Strictly Tic-Tac-Toe - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_tictactoe::{Console, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    run(cli.print_history)
}

/// Plays one game on stdin/stdout.
#[instrument]
fn run(print_history: bool) -> Result<()> {
    info!("Starting Strictly Tic-Tac-Toe");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut orchestrator = Orchestrator::new(console);

    let outcome = orchestrator.run().context("Game aborted")?;
    if print_history {
        orchestrator
            .print_history()
            .context("Failed to print move history")?;
    }
    orchestrator.finish();

    info!(%outcome, "Game finished");
    Ok(())
}
