//! Goods colors shared by cards and cubes.

use serde::{Deserialize, Serialize};

/// Number of colors in the full palette.
pub const COLOR_COUNT: usize = 6;

/// Goods color. Cards and cubes use the same palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Red,
    Green,
    Yellow,
    Brown,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::White,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Brown,
    ];

    /// Position of this color in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert from a palette index.
    #[must_use]
    pub fn from_index(idx: usize) -> Option<Color> {
        Self::ALL.get(idx).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
