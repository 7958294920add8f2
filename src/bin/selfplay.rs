use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use gammon::ai::{Agent, ExpectimaxAgent, RandomAgent};
use gammon::config::AppConfig;
use gammon::play::run_match;

/// Run headless backgammon matches between agents.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run headless backgammon matches")]
struct Cli {
    /// Agent playing White: expectimax or random
    #[arg(long, default_value = "expectimax")]
    white: String,

    /// Agent playing Black: expectimax or random
    #[arg(long, default_value = "random")]
    black: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Override base dice seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.play.num_games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.play.base_seed = seed;
    }

    let mut white = build_agent(&cli.white, config.search.depth)?;
    let mut black = build_agent(&cli.black, config.search.depth)?;

    println!(
        "{} (White) vs {} (Black): {} games, depth {}, seed {}",
        white.name(),
        black.name(),
        config.play.num_games,
        config.search.depth,
        config.play.base_seed
    );

    let stats = run_match(
        white.as_mut(),
        black.as_mut(),
        config.play.num_games,
        config.play.base_seed,
        config.play.max_turns,
    )
    .context("running match")?;

    println!(
        "White wins: {}  Black wins: {}  Unfinished: {}",
        stats.white_wins, stats.black_wins, stats.unfinished
    );
    println!("Mean game length: {:.1} turns", stats.mean_game_length());

    Ok(())
}

fn build_agent(name: &str, depth: u32) -> Result<Box<dyn Agent>> {
    match name {
        "expectimax" => Ok(Box::new(ExpectimaxAgent::new(depth))),
        "random" => Ok(Box::new(RandomAgent::new())),
        other => bail!("unknown agent '{}' (expected 'expectimax' or 'random')", other),
    }
}
