//! Goods cards and deck construction.
//!
//! A card carries only its color. `CardId` is assigned at deck construction
//! so that individual cards can be told apart in tests and logs; the rules
//! never depend on it.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::core::GameRng;

/// Identifier for a single physical card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A goods card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: Color,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, color: Color) -> Self {
        Self { id, color }
    }
}

/// Build an unshuffled deck with `per_color` cards of each palette color.
///
/// Cards are numbered in construction order.
///
/// ```
/// use merchants::cards::{build_deck, Color};
///
/// let deck = build_deck(&Color::ALL, 10);
/// assert_eq!(deck.len(), 60);
/// assert_eq!(deck.iter().filter(|c| c.color == Color::Red).count(), 10);
/// ```
#[must_use]
pub fn build_deck(palette: &[Color], per_color: usize) -> Vec<Card> {
    palette
        .iter()
        .flat_map(|&color| std::iter::repeat(color).take(per_color))
        .enumerate()
        .map(|(i, color)| Card::new(CardId::new(i as u32), color))
        .collect()
}

/// Build a deck and shuffle it with a uniform random permutation.
#[must_use]
pub fn shuffled_deck(palette: &[Color], per_color: usize, rng: &mut GameRng) -> Vec<Card> {
    let mut deck = build_deck(palette, per_color);
    rng.shuffle(&mut deck);
    deck
}
