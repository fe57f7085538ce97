//! Game rules for reversi.
//!
//! Rules are pure functions over a [`Board`](crate::Board) and never
//! fail on a valid board. Counting queries live in [`count`]; legality,
//! flips and turn transitions sit behind the [`Ruler`] trait so that
//! rule variants can be swapped without touching the game state.

pub mod count;
pub mod reversi;
pub mod ruler;

pub use count::{Score, count_disks, count_empty, score, side_with_more_disks};
pub use reversi::ReversiRuler;
pub use ruler::Ruler;
