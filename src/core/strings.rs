use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Number of strings (horizontal reference lines) on the fretboard.
pub const STRING_COUNT: usize = 6;

/// One of the six strings in standard tuning, ordered bottom-to-top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuitarString {
    LowE,
    A,
    D,
    G,
    B,
    HighE,
}

impl GuitarString {
    /// All strings in slot order (`E` at slot 0 through `e` at slot 5).
    pub const ALL: [GuitarString; STRING_COUNT] = [
        GuitarString::LowE,
        GuitarString::A,
        GuitarString::D,
        GuitarString::G,
        GuitarString::B,
        GuitarString::HighE,
    ];

    /// Symbol used in input files and as the axis label.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LowE => "E",
            Self::A => "A",
            Self::D => "D",
            Self::G => "G",
            Self::B => "B",
            Self::HighE => "e",
        }
    }

    #[must_use]
    pub const fn slot(self) -> usize {
        match self {
            Self::LowE => 0,
            Self::A => 1,
            Self::D => 2,
            Self::G => 3,
            Self::B => 4,
            Self::HighE => 5,
        }
    }

    /// Case-sensitive lookup: `E` and `e` are different strings.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|string| string.symbol() == symbol)
    }
}

/// Resolves a symbolic string name to its numeric vertical slot.
pub fn string_slot(symbol: &str) -> ChartResult<f64> {
    GuitarString::from_symbol(symbol)
        .map(|string| string.slot() as f64)
        .ok_or_else(|| {
            let choices: Vec<&str> = GuitarString::ALL.iter().map(|s| s.symbol()).collect();
            ChartError::Schema(format!(
                "invalid string value '{symbol}', must be one of [{}]",
                choices.join(", ")
            ))
        })
}
