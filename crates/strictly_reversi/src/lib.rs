//! Strictly Reversi - pure reversi game logic.
//!
//! # Architecture
//!
//! - **Board**: even-by-even grid of optional disks, seeded with the
//!   standard center block
//! - **Rules**: the [`Ruler`] capability (flips, legality, turn
//!   transitions) and its standard implementation [`ReversiRuler`],
//!   plus read-only counting queries
//! - **Game**: session state (phase, player kinds, board) and the
//!   placement sequence that mutates it
//! - **Symbol**: the plain-text save format for [`Game`]
//!
//! # Example
//!
//! ```
//! use strictly_reversi::{Coordinate, Disk, Game, ReversiRuler, TurnOutcome, advance_phase, place_disk};
//!
//! let ruler = ReversiRuler;
//! let mut game = Game::default();
//!
//! let placement = place_disk(&mut game, &ruler, Disk::Dark, Coordinate::new(2, 3))?;
//! assert_eq!(placement.flipped(), &[Coordinate::new(3, 3)]);
//!
//! assert_eq!(advance_phase(&mut game, &ruler), TurnOutcome::Continue(Disk::Light));
//! # Ok::<(), strictly_reversi::PlacementError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod disk;
mod game;
mod phase;
mod placement;
mod player;
mod rules;
mod symbol;

pub use board::{Board, DimensionError};
pub use coordinate::Coordinate;
pub use disk::Disk;
pub use game::Game;
pub use phase::GamePhase;
pub use placement::{Placement, PlacementError, TurnOutcome, advance_phase, place_disk};
pub use player::PlayerKind;
pub use rules::{
    ReversiRuler, Ruler, Score, count_disks, count_empty, score, side_with_more_disks,
};
pub use symbol::DecodeError;
