//! Command-line interface for strictly_tictactoe.

use clap::Parser;

/// Strictly Tic-Tac-Toe - two players, one console
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the finished game's moves as JSON
    #[arg(long)]
    pub print_history: bool,
}
