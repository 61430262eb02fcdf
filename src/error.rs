//! Error types for the Merchants engine.
//!
//! Every command reports failure through `MerchantsError`. Failures are
//! always recoverable: a command that returns `Err` has not touched state.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerchantsError {
    /// Empty, out-of-range, duplicated, or mixed-color card indices.
    #[error("Invalid card selection")]
    InvalidSelection,

    /// Ship index out of range, or the slot holds no cube.
    #[error("Ship slot unavailable")]
    SlotUnavailable,

    /// Requested cube color or special card has no remaining supply.
    #[error("Supply exhausted")]
    SupplyExhausted,

    #[error("Insufficient funds: needed {needed}, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },

    /// The deck has no cards left to draw.
    #[error("Deck exhausted")]
    DeckExhausted,

    /// The current player has used every exchange allowed this turn.
    #[error("Exchange limit reached for this turn")]
    ExchangeLimitReached,

    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(usize),

    /// Deck cannot cover the opening deal and marketplace.
    #[error("Deck too small: {available} cards for {required} required")]
    DeckTooSmall { required: usize, available: usize },

    /// The game has ended; no further commands are accepted.
    #[error("Game over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, MerchantsError>;
