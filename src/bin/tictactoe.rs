//! Tic-Tac-Toe on the command line: play a match or run a bot series.

use anyhow::Result;
use clap::{Parser, Subcommand};
use minimax_lib::cli::{self, BotsArgs, PlayArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with a minimax / alpha-beta opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match, each seat human, random or minimax
    Play(PlayArgs),

    /// Run a bot-vs-bot series and print win/draw statistics
    Bots(BotsArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => cli::execute_play(args)?,
        Commands::Bots(args) => cli::execute_bots(args)?,
    }
    Ok(())
}
