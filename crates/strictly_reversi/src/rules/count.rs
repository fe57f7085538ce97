//! Disk counting over a board.

use crate::{Board, Disk};
use tracing::instrument;

/// Number of cells holding `side`.
#[instrument(skip(board))]
pub fn count_disks(side: Disk, board: &Board) -> usize {
    board.cells().iter().filter(|&&cell| cell == Some(side)).count()
}

/// Number of empty cells.
pub fn count_empty(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_none()).count()
}

/// The side with strictly more disks, or `None` on a tie.
#[instrument(skip(board))]
pub fn side_with_more_disks(board: &Board) -> Option<Disk> {
    let dark = count_disks(Disk::Dark, board);
    let light = count_disks(Disk::Light, board);
    match dark.cmp(&light) {
        std::cmp::Ordering::Greater => Some(Disk::Dark),
        std::cmp::Ordering::Less => Some(Disk::Light),
        std::cmp::Ordering::Equal => None,
    }
}

/// Per-side disk counts at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[display("Dark {} - {} Light", dark, light)]
pub struct Score {
    /// Dark disks on the board.
    pub dark: usize,
    /// Light disks on the board.
    pub light: usize,
}

impl Score {
    /// Count for one side.
    pub fn of(&self, side: Disk) -> usize {
        match side {
            Disk::Dark => self.dark,
            Disk::Light => self.light,
        }
    }
}

/// Counts both sides in one pass.
pub fn score(board: &Board) -> Score {
    board
        .cells()
        .iter()
        .fold(Score::default(), |mut score, cell| {
            match cell {
                Some(Disk::Dark) => score.dark += 1,
                Some(Disk::Light) => score.light += 1,
                None => {}
            }
            score
        })
}
