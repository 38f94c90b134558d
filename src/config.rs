//! Command-line configuration of the terminal driver

use clap::Parser;

/// Play a sequence of moves from the starting position and print the result
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "chess1", version, about)]
pub struct DriverConfig {
    /// Moves in coordinate notation, e.g. `e2e4 e7e5 g1f3` (promotions as `e7e8q`)
    #[arg(value_name = "MOVES")]
    pub moves: Vec<String>,

    /// Take back this many moves after playing them
    #[arg(long, default_value_t = 0)]
    pub undo: usize,

    /// Print a JSON summary instead of the board diagram
    #[arg(long)]
    pub json: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
