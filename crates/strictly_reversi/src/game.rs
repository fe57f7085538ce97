//! Mutable session state for one game.

use crate::{Board, Disk, GamePhase, PlayerKind};
use tracing::instrument;

/// One game session: phase, per-side player kinds and the board.
///
/// The board and phase change only through
/// [`place_disk`](crate::place_disk) and
/// [`advance_phase`](crate::advance_phase); player kinds may be
/// reassigned at any time. Serializes as its save-file symbol.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Game {
    pub(crate) phase: GamePhase,
    pub(crate) dark_player: PlayerKind,
    pub(crate) light_player: PlayerKind,
    pub(crate) board: Board,
}

impl Game {
    /// Starts a fresh game on `board`: dark to move, both sides manual.
    #[instrument(skip(board), fields(rows = board.rows(), columns = board.columns()))]
    pub fn new(board: Board) -> Self {
        Self {
            phase: GamePhase::default(),
            dark_player: PlayerKind::Manual,
            light_player: PlayerKind::Manual,
            board,
        }
    }

    /// Starts a fresh game on a newly seeded `rows x columns` board.
    ///
    /// # Panics
    ///
    /// Panics on invalid dimensions, like [`Board::new`].
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self::new(Board::new(rows, columns))
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player kind of the side to move, or `None` once the game has ended.
    pub fn current_player(&self) -> Option<PlayerKind> {
        self.phase.turn().map(|turn| self.player(turn))
    }

    /// Player kind assigned to `side`.
    pub fn player(&self, side: Disk) -> PlayerKind {
        match side {
            Disk::Dark => self.dark_player,
            Disk::Light => self.light_player,
        }
    }

    /// Assigns a player kind to `side`.
    #[instrument(skip(self))]
    pub fn set_player(&mut self, kind: PlayerKind, side: Disk) {
        match side {
            Disk::Dark => self.dark_player = kind,
            Disk::Light => self.light_player = kind,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
