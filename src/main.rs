use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess1::{run, DriverConfig};

fn main() -> anyhow::Result<()> {
    let config = DriverConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log filter {:?}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = run(&config).context("failed to play the requested moves")?;

    if config.json {
        let summary = serde_json::to_string_pretty(&session.summary())?;
        println!("{summary}");
    } else {
        let summary = session.summary();
        print!("{}", summary.board);
        println!(
            "{:?} to move: {:?} ({} legal moves)",
            summary.side_to_move, summary.state, summary.legal_moves
        );
        if !summary.moves.is_empty() {
            println!("moves: {}", summary.moves.join(" "));
        }
    }
    Ok(())
}
