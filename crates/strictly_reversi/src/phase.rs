//! Turn phase of a game.

use crate::Disk;
use serde::{Deserialize, Serialize};

/// Whose turn it is, or that the game is over.
///
/// Games start at `Ongoing { turn: Dark }`. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// A side is to move.
    #[display("{}'s turn", turn)]
    Ongoing {
        /// The side to move.
        turn: Disk,
    },
    /// Neither side can move.
    #[display("Game over")]
    Ended,
}

impl GamePhase {
    /// The side to move, or `None` once the game has ended.
    pub fn turn(self) -> Option<Disk> {
        match self {
            GamePhase::Ongoing { turn } => Some(turn),
            GamePhase::Ended => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_ended(self) -> bool {
        matches!(self, GamePhase::Ended)
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            GamePhase::Ongoing { turn } => turn.symbol(),
            GamePhase::Ended => '-',
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(GamePhase::Ended),
            other => Disk::from_symbol(other).map(|turn| GamePhase::Ongoing { turn }),
        }
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Ongoing { turn: Disk::Dark }
    }
}
