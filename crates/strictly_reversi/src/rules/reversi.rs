//! Standard reversi rules.

use super::Ruler;
use crate::{Board, Coordinate, Disk, Game, GamePhase};
use tracing::{debug, instrument};

/// Row and column steps, scanned in this order.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 0),
    (-1, 1),
];

/// The standard ruleset: a placement must bracket at least one line of
/// opposing disks, and a side with no legal placement passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReversiRuler;

impl Ruler for ReversiRuler {
    fn flipped_coordinates(&self, disk: Disk, at: Coordinate, board: &Board) -> Vec<Coordinate> {
        if !board.contains(at) || board.get(at).is_some() {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for (row_delta, column_delta) in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = at;
            loop {
                cursor = match cursor.offset(row_delta, column_delta) {
                    Some(next) if board.contains(next) => next,
                    _ => break,
                };
                match board.get(cursor) {
                    Some(found) if found == disk => {
                        flipped.append(&mut line);
                        break;
                    }
                    Some(_) => line.push(cursor),
                    None => break,
                }
            }
        }
        flipped
    }

    #[instrument(skip(self, game), fields(phase = %game.phase()))]
    fn next_phase(&self, game: &Game) -> GamePhase {
        let GamePhase::Ongoing { turn } = game.phase() else {
            return GamePhase::Ended;
        };

        let opponent = turn.flipped();
        let next = if !self.valid_moves(opponent, game.board()).is_empty() {
            GamePhase::Ongoing { turn: opponent }
        } else if !self.valid_moves(turn, game.board()).is_empty() {
            GamePhase::Ongoing { turn }
        } else {
            GamePhase::Ended
        };
        debug!(next = %next, "Computed next phase");
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerKind;

    fn at(row: usize, column: usize) -> Coordinate {
        Coordinate::new(row, column)
    }

    /// Builds a board from rows of `x`, `o` and `-`.
    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len(), rows[0].len());
        for (row, line) in rows.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                board.set(at(row, column), Disk::from_symbol(symbol));
            }
        }
        board
    }

    fn game_on(board: Board, turn: Disk) -> Game {
        let mut game = Game::new(board);
        game.phase = GamePhase::Ongoing { turn };
        game
    }

    #[test]
    fn test_opening_moves() {
        let moves = ReversiRuler.valid_moves(Disk::Dark, &Board::default());
        assert_eq!(moves, vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]);
    }

    #[test]
    fn test_opening_moves_for_light() {
        let moves = ReversiRuler.valid_moves(Disk::Light, &Board::default());
        assert_eq!(moves, vec![at(2, 4), at(3, 5), at(4, 2), at(5, 3)]);
    }

    #[test]
    fn test_single_flip() {
        let flipped = ReversiRuler.flipped_coordinates(Disk::Dark, at(2, 3), &Board::default());
        assert_eq!(flipped, vec![at(3, 3)]);
    }

    #[test]
    fn test_occupied_cell_flips_nothing() {
        let board = Board::default();
        assert!(ReversiRuler.flipped_coordinates(Disk::Dark, at(3, 3), &board).is_empty());
        assert!(!ReversiRuler.can_place(Disk::Light, at(3, 4), &board));
    }

    #[test]
    fn test_off_board_origin_flips_nothing() {
        let board = Board::default();
        assert!(ReversiRuler.flipped_coordinates(Disk::Dark, at(8, 3), &board).is_empty());
    }

    #[test]
    fn test_line_ending_in_empty_is_discarded() {
        let board = board_from(&["----", "-oo-", "-xo-", "----"]);
        // Row 1 westward from (1, 3): o, o, then empty.
        assert!(!ReversiRuler.can_place(Disk::Dark, at(1, 3), &board));
    }

    #[test]
    fn test_line_running_off_board_is_discarded() {
        let board = board_from(&["oo--", "-xo-", "-ox-", "----"]);
        // Row 0 westward from (0, 2): o, o, then the edge.
        let flipped = ReversiRuler.flipped_coordinates(Disk::Dark, at(0, 2), &board);
        assert_eq!(flipped, vec![at(1, 2)]);
    }

    #[test]
    fn test_multiple_directions_in_scan_order() {
        let board = board_from(&[
            "x-x---", //
            "-oo---", //
            "xo----", //
            "------",
        ]);
        // From (2, 2): up-left captures (1, 1), left captures (2, 1), up captures (1, 2).
        let flipped = ReversiRuler.flipped_coordinates(Disk::Dark, at(2, 2), &board);
        assert_eq!(flipped, vec![at(1, 1), at(2, 1), at(1, 2)]);
    }

    #[test]
    fn test_long_line_in_distance_order() {
        let board = board_from(&["xooo----", "--------", "--------", "--------"]);
        let flipped = ReversiRuler.flipped_coordinates(Disk::Dark, at(0, 4), &board);
        assert_eq!(flipped, vec![at(0, 3), at(0, 2), at(0, 1)]);
    }

    #[test]
    fn test_flips_never_include_origin_or_own_disks() {
        let board = board_from(&["xoxo", "oxox", "x--o", "oxox"]);
        for disk in Disk::SIDES {
            for origin in board.coordinates() {
                for flipped in ReversiRuler.flipped_coordinates(disk, origin, &board) {
                    assert_ne!(flipped, origin);
                    assert_eq!(board.get(flipped), Some(disk.flipped()));
                }
            }
        }
    }

    #[test]
    fn test_next_phase_alternates() {
        let mut game = Game::default();
        game.board.set(at(2, 3), Some(Disk::Dark));
        game.board.set(at(3, 3), Some(Disk::Dark));
        assert_eq!(
            ReversiRuler.next_phase(&game),
            GamePhase::Ongoing { turn: Disk::Light }
        );
    }

    #[test]
    fn test_next_phase_pass_keeps_turn() {
        // Light has no bracket anywhere; dark can still play at (0, 3).
        let board = board_from(&["xoo-", "----", "----", "----"]);
        let game = game_on(board, Disk::Dark);
        assert!(ReversiRuler.valid_moves(Disk::Light, game.board()).is_empty());
        assert_eq!(
            ReversiRuler.next_phase(&game),
            GamePhase::Ongoing { turn: Disk::Dark }
        );
    }

    #[test]
    fn test_next_phase_full_board_ends() {
        let mut board = Board::default();
        for cell in board.coordinates().collect::<Vec<_>>() {
            board.set(cell, Some(Disk::Dark));
        }
        let game = game_on(board, Disk::Dark);
        assert_eq!(ReversiRuler.next_phase(&game), GamePhase::Ended);
    }

    #[test]
    fn test_next_phase_ends_regardless_of_turn() {
        let board = board_from(&["xx--", "----", "----", "--oo"]);
        for turn in Disk::SIDES {
            let mut game = game_on(board.clone(), turn);
            game.set_player(PlayerKind::Computer, turn);
            assert_eq!(ReversiRuler.next_phase(&game), GamePhase::Ended);
        }
    }

    #[test]
    fn test_next_phase_on_ended_is_noop() {
        let mut game = Game::default();
        game.phase = GamePhase::Ended;
        assert_eq!(ReversiRuler.next_phase(&game), GamePhase::Ended);
    }
}
