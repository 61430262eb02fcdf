//! Core types: players, state, actions, RNG, configuration.
//!
//! Everything here is plain data. The rules that mutate it live in `rules`.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, CardSelection};
pub use config::{MerchantsConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId, PlayerMap, ShipSlot, Ships};
pub use rng::GameRng;
pub use state::{CubeSupply, GamePhase, GameState};
