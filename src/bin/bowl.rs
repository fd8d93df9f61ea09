//! Bowl a game from the command line.
//!
//! Reads rolls from stdin and prints the score board after each one. With
//! `--auto`, plays a seeded random game instead and prints the result.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_bowling::core::{Game, MAX_ROLLS};
use rust_bowling::session::{Session, SessionConfig, SessionOutcome};
use rust_bowling::sim::{RollGenerator, MAX_ERROR_ALLOWANCE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bowl")]
#[command(about = "Score a ten-pin bowling game roll by roll")]
struct Args {
    /// JSON file with display options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Don't print the score board before each roll
    #[arg(long)]
    hide_score: bool,

    /// Don't print how many pins are standing
    #[arg(long)]
    hide_pins_left: bool,

    /// Don't print the legal next rolls
    #[arg(long)]
    hide_possible_rolls: bool,

    /// Play a random game instead of reading rolls
    #[arg(long)]
    auto: bool,

    /// Seed for --auto (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pins below the best legal roll a random roll may fall (0-10)
    #[arg(long, default_value_t = MAX_ERROR_ALLOWANCE)]
    error_allowance: u8,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if args.auto {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, error_allowance = args.error_allowance, "playing random game");

        let mut game = Game::new();
        RollGenerator::new(seed)
            .with_error_allowance(args.error_allowance)
            .play(&mut game, MAX_ROLLS);
        println!("seed: {seed}");
        println!("{game}");
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    if args.hide_score {
        config.show_score = false;
    }
    if args.hide_pins_left {
        config.show_pins_left = false;
    }
    if args.hide_possible_rolls {
        config.show_possible_rolls = false;
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    match session.run()? {
        SessionOutcome::Finished { score } => info!(score, "session finished"),
        outcome => info!(?outcome, "session ended"),
    }
    Ok(())
}
