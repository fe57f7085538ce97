//! Rectangular reversi board.

use crate::{Coordinate, Disk};
use derive_more::{Display, Error};
use std::fmt;
use tracing::instrument;

/// Board dimensions rejected by [`Board::check_dimensions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board must be even-by-even and larger than 3x3, got {}x{}", rows, columns)]
pub struct DimensionError {
    /// Requested row count.
    pub rows: usize,
    /// Requested column count.
    pub columns: usize,
}

/// A `rows x columns` grid where each cell is empty or holds a [`Disk`].
///
/// Both dimensions are even and greater than 3, so the center 2x2 block
/// used for the starting position is always well defined. Cells are
/// stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Disk>>,
}

impl Board {
    /// Edge length of the standard board.
    pub const STANDARD_SIZE: usize = 8;

    /// Checks that `rows` and `columns` are both even and greater than 3.
    pub fn check_dimensions(rows: usize, columns: usize) -> Result<(), DimensionError> {
        if rows > 3 && rows % 2 == 0 && columns > 3 && columns % 2 == 0 {
            Ok(())
        } else {
            Err(DimensionError { rows, columns })
        }
    }

    /// Creates a board with the four center cells seeded.
    ///
    /// The center cell and the cell diagonally up-left of it are light,
    /// the other two cells of the center block are dark.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are even and greater than 3.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Self {
        if let Err(e) = Self::check_dimensions(rows, columns) {
            panic!("{}", e);
        }

        let mut board = Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        };

        let (row, column) = (rows / 2, columns / 2);
        board.set(Coordinate::new(row, column), Some(Disk::Light));
        board.set(Coordinate::new(row - 1, column - 1), Some(Disk::Light));
        board.set(Coordinate::new(row - 1, column), Some(Disk::Dark));
        board.set(Coordinate::new(row, column - 1), Some(Disk::Dark));
        board
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.column < self.columns
    }

    /// Returns the disk at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the board.
    pub fn get(&self, at: Coordinate) -> Option<Disk> {
        self.cells[self.index(at)]
    }

    /// Overwrites the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `at` is off the board.
    pub fn set(&mut self, at: Coordinate, disk: Option<Disk>) {
        let index = self.index(at);
        self.cells[index] = disk;
    }

    /// Every cell coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Coordinate::new(row, column)))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Option<Disk>] {
        &self.cells
    }

    fn index(&self, at: Coordinate) -> usize {
        assert!(
            self.contains(at),
            "Index out of range: {} on a {}x{} board",
            at,
            self.rows,
            self.columns
        );
        at.row * self.columns + at.column
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::STANDARD_SIZE, Self::STANDARD_SIZE)
    }
}

/// Labelled grid. Column letters run `a` to `z` and wrap on wider boards.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for column in 0..self.columns {
            let label = char::from_digit((column % 26) as u32 + 10, 36).ok_or(fmt::Error)?;
            write!(f, " {}", label)?;
        }
        for row in 0..self.rows {
            write!(f, "\n{:>3}", row + 1)?;
            for column in 0..self.columns {
                let symbol = self
                    .get(Coordinate::new(row, column))
                    .map_or('-', Disk::symbol);
                write!(f, " {}", symbol)?;
            }
        }
        Ok(())
    }
}
