//! Cell coordinates on the board.

use serde::{Deserialize, Serialize};

/// A cell address: zero-based row and column.
///
/// Ordering is row-major, which is also the order in which
/// [`Board::coordinates`](crate::Board::coordinates) yields cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Display,
)]
#[display("({}, {})", row, column)]
pub struct Coordinate {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Steps by a signed delta, returning `None` when either axis would go negative.
    pub fn offset(self, row_delta: isize, column_delta: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(row_delta)?,
            column: self.column.checked_add_signed(column_delta)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coordinate::from((2, 3)), Coordinate::new(2, 3));
    }

    #[test]
    fn test_offset_stops_at_zero() {
        assert_eq!(Coordinate::new(0, 4).offset(-1, 0), None);
        assert_eq!(Coordinate::new(1, 1).offset(-1, 1), Some(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_row_major_order() {
        assert!(Coordinate::new(0, 7) < Coordinate::new(1, 0));
    }
}
