//! The two disk colors.

use serde::{Deserialize, Serialize};

/// A disk placed on the board, and by extension the side that owns it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Disk {
    /// Dark disk (moves first).
    Dark,
    /// Light disk.
    Light,
}

impl Disk {
    /// Both sides in turn order.
    pub const SIDES: [Disk; 2] = [Disk::Dark, Disk::Light];

    /// Returns the opposite color.
    pub fn flipped(self) -> Self {
        match self {
            Disk::Dark => Disk::Light,
            Disk::Light => Disk::Dark,
        }
    }

    /// Save-file symbol for this disk.
    pub fn symbol(self) -> char {
        match self {
            Disk::Dark => 'x',
            Disk::Light => 'o',
        }
    }

    /// Parses a save-file symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Disk::Dark),
            'o' => Some(Disk::Light),
            _ => None,
        }
    }
}

impl std::ops::Not for Disk {
    type Output = Self;

    fn not(self) -> Self {
        self.flipped()
    }
}
