//! Rule-variant capability.

use crate::{Board, Coordinate, Disk, Game, GamePhase};

/// Legality, flip computation and turn transitions for one rule variant.
///
/// Only [`flipped_coordinates`](Ruler::flipped_coordinates) and
/// [`next_phase`](Ruler::next_phase) are required; legality and move
/// enumeration derive from the flip set.
pub trait Ruler: std::fmt::Debug + Send + Sync {
    /// Cells that would flip if `disk` were placed at `at`.
    ///
    /// Empty when `at` is occupied or nothing would be captured.
    fn flipped_coordinates(&self, disk: Disk, at: Coordinate, board: &Board) -> Vec<Coordinate>;

    /// Whether `disk` may be placed at `at`.
    fn can_place(&self, disk: Disk, at: Coordinate, board: &Board) -> bool {
        !self.flipped_coordinates(disk, at, board).is_empty()
    }

    /// Every legal placement for `side`, row-major.
    fn valid_moves(&self, side: Disk, board: &Board) -> Vec<Coordinate> {
        board
            .coordinates()
            .filter(|&at| self.can_place(side, at, board))
            .collect()
    }

    /// Phase that follows a completed placement in `game`.
    fn next_phase(&self, game: &Game) -> GamePhase;
}
