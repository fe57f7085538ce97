//! The placement sequence: apply a capture, then advance the turn.
//!
//! Placement is caller-driven rather than a method on [`Game`]: the
//! caller gates input (animations, whose turn it is), applies the flips
//! with [`place_disk`], then moves the phase on with [`advance_phase`].

use crate::rules::side_with_more_disks;
use crate::{Coordinate, Disk, Game, GamePhase, Ruler};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use tracing::{debug, instrument, warn};

/// A placement that has been applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Placement {
    /// The placed color.
    disk: Disk,
    /// Where the new disk went.
    origin: Coordinate,
    /// Captured cells, in scan order.
    flipped: Vec<Coordinate>,
}

impl Placement {
    /// Origin followed by every flipped cell: the order in which cells
    /// should be redrawn.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::once(self.origin).chain(self.flipped.iter().copied())
    }
}

/// Rejected placement. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlacementError {
    /// The cell is occupied or no disk would flip.
    #[display("Cannot place {} disk at {}", disk, coordinate)]
    IllegalPlacement {
        /// Color that was attempted.
        disk: Disk,
        /// Target cell.
        coordinate: Coordinate,
    },
}

/// Places `disk` at `at` and flips every captured disk.
///
/// # Errors
///
/// Returns [`PlacementError::IllegalPlacement`] if nothing would flip.
/// Nothing is written in that case.
#[instrument(skip(game, ruler))]
pub fn place_disk<R: Ruler + ?Sized>(
    game: &mut Game,
    ruler: &R,
    disk: Disk,
    at: Coordinate,
) -> Result<Placement, PlacementError> {
    let flipped = ruler.flipped_coordinates(disk, at, &game.board);
    if flipped.is_empty() {
        warn!("Illegal placement");
        return Err(PlacementError::IllegalPlacement {
            disk,
            coordinate: at,
        });
    }

    game.board.set(at, Some(disk));
    for &cell in &flipped {
        game.board.set(cell, Some(disk));
    }
    debug!(flips = flipped.len(), "Disk placed");

    Ok(Placement::new(disk, at, flipped))
}

/// How the phase moved after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play passes to `turn` normally.
    Continue(Disk),
    /// `passed` had no legal move, so `turn` moves again.
    Pass {
        /// Side that could not move.
        passed: Disk,
        /// Side to move next.
        turn: Disk,
    },
    /// Neither side can move.
    Ended {
        /// Side with more disks; `None` on a tie.
        winner: Option<Disk>,
    },
}

/// Assigns `ruler.next_phase(game)` to the game and classifies the move.
#[instrument(skip(game, ruler), fields(phase = %game.phase()))]
pub fn advance_phase<R: Ruler + ?Sized>(game: &mut Game, ruler: &R) -> TurnOutcome {
    let previous = game.phase;
    let next = ruler.next_phase(game);
    game.phase = next;

    let outcome = match (previous, next) {
        (GamePhase::Ongoing { turn: before }, GamePhase::Ongoing { turn }) if before == turn => {
            TurnOutcome::Pass {
                passed: turn.flipped(),
                turn,
            }
        }
        (_, GamePhase::Ongoing { turn }) => TurnOutcome::Continue(turn),
        (_, GamePhase::Ended) => TurnOutcome::Ended {
            winner: side_with_more_disks(&game.board),
        },
    };
    debug!(?outcome, "Phase advanced");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, ReversiRuler};

    #[test]
    fn test_opening_placement() {
        let mut game = Game::default();
        let placement = place_disk(&mut game, &ReversiRuler, Disk::Dark, Coordinate::new(2, 3))
            .expect("Legal opening");

        assert_eq!(placement.flipped(), &vec![Coordinate::new(3, 3)]);
        assert_eq!(
            placement.coordinates().collect::<Vec<_>>(),
            vec![Coordinate::new(2, 3), Coordinate::new(3, 3)]
        );
        assert_eq!(game.board().get(Coordinate::new(2, 3)), Some(Disk::Dark));
        assert_eq!(game.board().get(Coordinate::new(3, 3)), Some(Disk::Dark));

        assert_eq!(
            advance_phase(&mut game, &ReversiRuler),
            TurnOutcome::Continue(Disk::Light)
        );
        assert_eq!(game.phase(), GamePhase::Ongoing { turn: Disk::Light });
    }

    #[test]
    fn test_illegal_placement_leaves_board_untouched() {
        let mut game = Game::default();
        let before = game.clone();

        let result = place_disk(&mut game, &ReversiRuler, Disk::Dark, Coordinate::new(0, 0));
        assert_eq!(
            result,
            Err(PlacementError::IllegalPlacement {
                disk: Disk::Dark,
                coordinate: Coordinate::new(0, 0),
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_placed_cell_cannot_be_placed_again() {
        let mut game = Game::default();
        let at = Coordinate::new(5, 4);
        place_disk(&mut game, &ReversiRuler, Disk::Dark, at).expect("Legal opening");
        assert!(!ReversiRuler.can_place(Disk::Dark, at, game.board()));
        assert!(!ReversiRuler.can_place(Disk::Light, at, game.board()));
    }

    #[test]
    fn test_error_message_names_disk_and_cell() {
        let err = PlacementError::IllegalPlacement {
            disk: Disk::Light,
            coordinate: Coordinate::new(1, 2),
        };
        assert_eq!(err.to_string(), "Cannot place Light disk at (1, 2)");
    }

    #[test]
    fn test_advance_reports_game_over_with_winner() {
        let mut board = Board::new(4, 4);
        for cell in board.coordinates().collect::<Vec<_>>() {
            board.set(cell, Some(Disk::Light));
        }
        let mut game = Game::new(board);
        assert_eq!(
            advance_phase(&mut game, &ReversiRuler),
            TurnOutcome::Ended {
                winner: Some(Disk::Light)
            }
        );
        assert!(game.phase().is_ended());
    }
}
