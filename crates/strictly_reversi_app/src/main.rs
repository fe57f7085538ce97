//! Strictly Reversi - terminal client
//!
//! Plays, inspects or resets the saved game.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_reversi::{Game, PlayerKind, score};
use strictly_reversi_app::{AppConfig, GameRepository};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "strictly_reversi.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { dark, light } => run_play(&cli.config, dark, light).await,
        Command::Show => {
            init_stderr_tracing();
            run_show(&load_config(&cli.config)?)
        }
        Command::Reset => {
            init_stderr_tracing();
            run_reset(&load_config(&cli.config)?)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<AppConfig> {
    AppConfig::load_or_default(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Run the interactive game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    dark: Option<PlayerKind>,
    light: Option<PlayerKind>,
) -> Result<()> {
    // Log to a file so output does not interleave with the board
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {}", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Reversi");
    let config = load_config(config_path)?;
    terminal::play(&config, dark, light).await
}

/// Print the saved game
fn run_show(config: &AppConfig) -> Result<()> {
    let repository = GameRepository::new(config.save_path());
    let game = repository.load_game()?;
    println!("{}\n", game.board());
    println!("{}", terminal::phase_line(&game));
    println!("{}", score(game.board()));
    Ok(())
}

/// Overwrite the saved game with a fresh one
fn run_reset(config: &AppConfig) -> Result<()> {
    let repository = GameRepository::new(config.save_path());
    let game = Game::with_size(*config.rows(), *config.columns());
    repository.save_game(&game)?;
    info!(path = %repository.path().display(), "Saved a new game");
    println!(
        "New {}x{} game saved to {}",
        config.rows(),
        config.columns(),
        repository.path().display()
    );
    Ok(())
}
