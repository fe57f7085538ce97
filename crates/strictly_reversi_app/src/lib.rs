//! Strictly Reversi application layer.
//!
//! Wraps the pure rules in [`strictly_reversi`] with everything a
//! playable session needs.
//!
//! # Architecture
//!
//! - **Repository**: saves and restores a game as a text file
//! - **Computer**: cancellable, delayed random move selection
//! - **Controller**: sequences taps, computer turns, passes, resets and
//!   player changes against one game, publishing [`GameEvent`]s
//! - **Config**: TOML settings for board size, save path and delay

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod config;
mod controller;
mod repository;

pub use computer::{Canceller, Computer};
pub use config::{AppConfig, ConfigError};
pub use controller::{GameController, GameEvent, Input, RequestId};
pub use repository::{FileIoError, FileOperation, GameRepository};
