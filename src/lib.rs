//! # merchants
//!
//! Rules engine for Merchants, a turn-based trading card board game.
//!
//! Players collect goods cards, deliver same-colored sets into a shared
//! marketplace, and earn coins for every ship carrying a cube of the
//! delivered color. Coins buy special cards: more ships, bigger hands,
//! better draws and payouts. The game ends when the deck runs out; the
//! richest merchant wins.
//!
//! ## Design Principles
//!
//! 1. **Pure state and rules**: No rendering, no I/O. A UI reads
//!    `GameState` snapshots and calls `GameEngine` commands.
//!
//! 2. **Deterministic**: Shuffles come from a seeded `GameRng`; cube picks
//!    go through an injectable `CubeChooser`.
//!
//! 3. **All or nothing**: A command either fully applies or returns an
//!    error and leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration
//! - `cards`: Colors, goods cards, special card catalog
//! - `rules`: `GameEngine` and the opening cube draft
//! - `sim`: Self-play driver over the command surface
//! - `error`: `MerchantsError`

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CubeSupply, GamePhase, GameRng, GameState, MerchantsConfig, Player,
    PlayerId, PlayerMap, ShipSlot,
};

pub use crate::cards::{Card, CardId, Color, SpecialCardType, SpecialCatalog, SpecialEffect};

pub use crate::rules::{CubeChooser, Delivery, GameEngine, RandomChooser, ScriptedChooser};

pub use crate::error::{MerchantsError, Result};
