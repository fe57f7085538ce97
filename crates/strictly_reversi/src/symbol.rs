//! Plain-text save format for [`Game`].
//!
//! ```text
//! <phase><dark player digit><light player digit>
//! <row 0>
//! ...
//! <row n-1>
//! ```
//!
//! The phase is `x` (dark to move), `o` (light to move) or `-` (ended).
//! Each row holds one character per cell: `x`, `o` or `-` for empty.

use crate::{Board, Coordinate, DimensionError, Disk, Game, GamePhase, PlayerKind};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

const EMPTY_SYMBOL: char = '-';

/// Why a save-file symbol could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DecodeError {
    /// Input has no header line.
    #[display("Missing header line")]
    MissingHeader,
    /// Header is not exactly three characters.
    #[display("Malformed header {:?}", _0)]
    MalformedHeader(#[error(not(source))] String),
    /// Unknown phase character.
    #[display("Unknown phase symbol {:?}", _0)]
    UnknownPhase(#[error(not(source))] char),
    /// Player digit does not map to a [`PlayerKind`].
    #[display("Unknown player symbol {:?}", _0)]
    UnknownPlayer(#[error(not(source))] char),
    /// No board rows follow the header.
    #[display("Missing board")]
    MissingBoard,
    /// Board rows do not describe a valid board size.
    #[display("{}", _0)]
    Dimensions(DimensionError),
    /// A row's length differs from the first row's.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Cells in the first row.
        expected: usize,
        /// Cells in this row.
        found: usize,
    },
    /// Cell character is not `x`, `o` or `-`.
    #[display("Unknown cell symbol {:?} at {}", symbol, at)]
    UnknownCell {
        /// Offending character.
        symbol: char,
        /// Cell it was found in.
        at: Coordinate,
    },
}

impl From<DimensionError> for DecodeError {
    fn from(err: DimensionError) -> Self {
        DecodeError::Dimensions(err)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            self.phase.symbol(),
            self.dark_player.raw_value(),
            self.light_player.raw_value()
        )?;
        for row in self.board.cells().chunks(self.board.columns()) {
            for cell in row {
                write!(f, "{}", cell.map_or(EMPTY_SYMBOL, Disk::symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Game {
    type Err = DecodeError;

    #[instrument(skip(symbol), fields(len = symbol.len()))]
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        let mut lines = symbol.lines();

        let header = lines.next().ok_or(DecodeError::MissingHeader)?;
        let (phase, dark_player, light_player) = decode_header(header)?;

        let mut rows = lines.collect::<Vec<_>>();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let board = decode_board(&rows)?;

        debug!(rows = board.rows(), columns = board.columns(), "Decoded game");
        Ok(Self {
            phase,
            dark_player,
            light_player,
            board,
        })
    }
}

fn decode_header(header: &str) -> Result<(GamePhase, PlayerKind, PlayerKind), DecodeError> {
    let symbols = header.chars().collect::<Vec<_>>();
    let [phase, dark, light] = symbols[..] else {
        warn!(header, "Malformed header");
        return Err(DecodeError::MalformedHeader(header.to_string()));
    };

    let phase = GamePhase::from_symbol(phase).ok_or(DecodeError::UnknownPhase(phase))?;
    Ok((phase, decode_player(dark)?, decode_player(light)?))
}

fn decode_player(symbol: char) -> Result<PlayerKind, DecodeError> {
    symbol
        .to_digit(10)
        .and_then(|digit| u8::try_from(digit).ok())
        .and_then(PlayerKind::from_raw_value)
        .ok_or(DecodeError::UnknownPlayer(symbol))
}

fn decode_board(rows: &[&str]) -> Result<Board, DecodeError> {
    let columns = rows
        .first()
        .ok_or(DecodeError::MissingBoard)?
        .chars()
        .count();
    Board::check_dimensions(rows.len(), columns)?;

    let mut board = Board::new(rows.len(), columns);
    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != columns {
            warn!(row, found, expected = columns, "Row length mismatch");
            return Err(DecodeError::RowLength {
                row,
                expected: columns,
                found,
            });
        }
        for (column, symbol) in line.chars().enumerate() {
            let at = Coordinate::new(row, column);
            let cell = match symbol {
                EMPTY_SYMBOL => None,
                other => Some(
                    Disk::from_symbol(other).ok_or(DecodeError::UnknownCell { symbol, at })?,
                ),
            };
            board.set(at, cell);
        }
    }
    Ok(board)
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        game.to_string()
    }
}

impl TryFrom<String> for Game {
    type Error = DecodeError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        symbol.parse()
    }
}
