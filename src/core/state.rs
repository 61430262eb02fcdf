//! Game state: everything on the table.
//!
//! ## GameState
//!
//! - Deck (face down, drawn from the top) and marketplace (face up)
//! - Cube supply and the per-game special card catalog
//! - Players, whose turn it is, and the current phase
//! - Turn counter and action history
//!
//! `GameState` is a plain snapshot. It is only mutated by `GameEngine`
//! commands; UIs read it through the query methods here. Deck, marketplace
//! and history use `im` persistent vectors so snapshots clone cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::MerchantsConfig;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{Card, Color, SpecialCatalog, COLOR_COUNT};

/// Phase within a player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Buy special cards and exchange cubes.
    #[default]
    Purchase,
    /// Deliver cards and draw.
    Deliver,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Purchase => f.write_str("Purchase"),
            GamePhase::Deliver => f.write_str("Deliver"),
        }
    }
}

/// Cubes not currently placed on any ship, per color.
///
/// For every color, `count + cubes on ships == initial`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSupply {
    counts: [u32; COLOR_COUNT],
    initial: [u32; COLOR_COUNT],
}

impl CubeSupply {
    /// Full supply of `per_color` cubes for each palette color.
    #[must_use]
    pub fn new(palette: &[Color], per_color: u32) -> Self {
        let mut counts = [0; COLOR_COUNT];
        for color in palette {
            counts[color.index()] = per_color;
        }
        Self {
            counts,
            initial: counts,
        }
    }

    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    /// Starting quantity of `color`.
    #[must_use]
    pub fn initial(&self, color: Color) -> u32 {
        self.initial[color.index()]
    }

    /// Colors with at least one cube left, in palette order.
    #[must_use]
    pub fn available(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&c| self.count(c) > 0)
            .collect()
    }

    /// Take one cube. Returns false if none are left.
    pub fn take(&mut self, color: Color) -> bool {
        let count = &mut self.counts[color.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Return one cube to supply.
    pub fn put_back(&mut self, color: Color) {
        self.counts[color.index()] += 1;
    }

    /// Cubes left across all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down deck. The top card is the back of the vector.
    pub(crate) deck: Vector<Card>,
    pub(crate) marketplace: Vector<Card>,
    pub(crate) cube_supply: CubeSupply,
    pub(crate) catalog: SpecialCatalog,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) current_player: PlayerId,
    pub(crate) phase: GamePhase,
    pub(crate) game_ended: bool,
    /// Starts at 1; increments whenever play passes to the next player.
    pub(crate) turn_number: u32,
    pub(crate) exchanges_this_turn: u32,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Empty table for `config`: no deck, full supplies, fresh players.
    ///
    /// The engine deals and drafts on top of this.
    #[must_use]
    pub fn new(config: &MerchantsConfig) -> Self {
        let players = PlayerMap::new(config.player_count, |id| {
            let mut player = Player::new(
                id,
                format!("Player {}", id.index() + 1),
                config.starting_ships,
                config.base_hand_limit,
            );
            player.coins = config.starting_coins;
            player
        });

        Self {
            deck: Vector::new(),
            marketplace: Vector::new(),
            cube_supply: CubeSupply::new(&config.palette, config.cubes_per_color),
            catalog: SpecialCatalog::standard(),
            players,
            current_player: PlayerId::new(0),
            phase: GamePhase::Purchase,
            game_ended: false,
            turn_number: 1,
            exchanges_this_turn: 0,
            history: Vector::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.game_ended
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn marketplace(&self) -> &Vector<Card> {
        &self.marketplace
    }

    #[must_use]
    pub fn cube_supply(&self) -> &CubeSupply {
        &self.cube_supply
    }

    #[must_use]
    pub fn catalog(&self) -> &SpecialCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Exchanges the current player has made this turn.
    #[must_use]
    pub fn exchanges_this_turn(&self) -> u32 {
        self.exchanges_this_turn
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards in deck, hands and marketplace combined.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.marketplace.len()
            + self.players.values().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Cubes of `color` sitting on ships across all players.
    #[must_use]
    pub fn placed_cubes(&self, color: Color) -> u32 {
        self.players.values().map(|p| p.ships_carrying(color)).sum()
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }
}
