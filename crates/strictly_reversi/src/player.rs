//! Who supplies a side's moves.

use serde::{Deserialize, Serialize};

/// Input mode for one side.
///
/// The discriminant is the digit written to save files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from a human.
    #[default]
    Manual = 0,
    /// Moves are picked automatically.
    Computer = 1,
}

impl PlayerKind {
    /// Save-file digit for this kind.
    pub fn raw_value(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its save-file digit.
    pub fn from_raw_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(PlayerKind::Manual),
            1 => Some(PlayerKind::Computer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_raw_values_round_trip() {
        for kind in PlayerKind::iter() {
            assert_eq!(PlayerKind::from_raw_value(kind.raw_value()), Some(kind));
        }
        assert_eq!(PlayerKind::from_raw_value(2), None);
    }

    #[test]
    fn test_parse_from_name() {
        assert_eq!(PlayerKind::from_str("computer"), Ok(PlayerKind::Computer));
        assert_eq!(PlayerKind::from_str("Manual"), Ok(PlayerKind::Manual));
        assert!(PlayerKind::from_str("robot").is_err());
    }
}
