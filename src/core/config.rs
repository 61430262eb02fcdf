//! Game configuration.
//!
//! `MerchantsConfig` fixes the table setup for one game: palette, deck and
//! cube quantities, opening deal, and per-turn allowances. Defaults are the
//! standard rules; builders exist mostly for tests and variants.

use serde::{Deserialize, Serialize};

use crate::cards::Color;
use crate::error::{MerchantsError, Result};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantsConfig {
    /// Number of players (2-6).
    pub player_count: usize,

    /// Colors in play. Cards and cubes exist only for these.
    pub palette: Vec<Color>,

    /// Cards of each color in the deck.
    pub cards_per_color: usize,

    /// Cubes of each color in the supply.
    pub cubes_per_color: u32,

    pub starting_hand_size: usize,

    /// Cards dealt face up into the marketplace at setup.
    pub market_size: usize,

    /// Empty ship slots each player starts with.
    pub starting_ships: usize,

    pub base_hand_limit: usize,

    pub starting_coins: u32,

    /// Base number of cards drawn by a draw action.
    pub draws_per_turn: usize,

    /// Cube exchanges allowed per turn before Crane bonuses.
    /// `None` means unlimited.
    pub exchange_limit: Option<u32>,
}

impl Default for MerchantsConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            palette: Color::ALL.to_vec(),
            cards_per_color: 10,
            cubes_per_color: 5,
            starting_hand_size: 3,
            market_size: 6,
            starting_ships: 2,
            base_hand_limit: 6,
            starting_coins: 0,
            draws_per_turn: 2,
            exchange_limit: None,
        }
    }
}

impl MerchantsConfig {
    /// Standard rules for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: &[Color]) -> Self {
        self.palette = palette.to_vec();
        self
    }

    #[must_use]
    pub fn with_cards_per_color(mut self, count: usize) -> Self {
        self.cards_per_color = count;
        self
    }

    #[must_use]
    pub fn with_cubes_per_color(mut self, count: u32) -> Self {
        self.cubes_per_color = count;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_market_size(mut self, size: usize) -> Self {
        self.market_size = size;
        self
    }

    #[must_use]
    pub fn with_starting_ships(mut self, ships: usize) -> Self {
        self.starting_ships = ships;
        self
    }

    #[must_use]
    pub fn with_base_hand_limit(mut self, limit: usize) -> Self {
        self.base_hand_limit = limit;
        self
    }

    #[must_use]
    pub fn with_starting_coins(mut self, coins: u32) -> Self {
        self.starting_coins = coins;
        self
    }

    #[must_use]
    pub fn with_draws_per_turn(mut self, draws: usize) -> Self {
        self.draws_per_turn = draws;
        self
    }

    /// Limit cube exchanges per turn. Crane grants one more.
    #[must_use]
    pub fn with_exchange_limit(mut self, limit: u32) -> Self {
        self.exchange_limit = Some(limit);
        self
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.palette.len() * self.cards_per_color
    }

    /// Cards removed from the deck by the opening deal and marketplace.
    #[must_use]
    pub fn setup_cards(&self) -> usize {
        self.player_count * self.starting_hand_size + self.market_size
    }

    /// Check that a game can be set up with this configuration.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(MerchantsError::InvalidPlayerCount(self.player_count));
        }
        if self.setup_cards() > self.deck_size() {
            return Err(MerchantsError::DeckTooSmall {
                required: self.setup_cards(),
                available: self.deck_size(),
            });
        }
        Ok(())
    }
}
