//! Command-line interface for strictly_reversi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_reversi::PlayerKind;

/// Strictly Reversi - Reversi in the terminal against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_reversi")]
#[command(about = "Play Reversi in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_reversi.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the saved game, or a new one if none is saved
    Play {
        /// Who plays dark (manual or computer)
        #[arg(long)]
        dark: Option<PlayerKind>,

        /// Who plays light (manual or computer)
        #[arg(long)]
        light: Option<PlayerKind>,
    },

    /// Print the saved game with its score
    Show,

    /// Replace the saved game with a fresh one
    Reset,
}
