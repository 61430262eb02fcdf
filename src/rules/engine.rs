//! The Merchants rules engine.
//!
//! `GameEngine` owns the `GameState` and is the only thing that mutates it.
//! Each command validates all of its preconditions before the first write,
//! so a command that returns `Err` leaves the state exactly as it was.
//!
//! Commands never advance the turn on their own; callers finish a phase with
//! `next_phase`.

use std::collections::BTreeMap;

use log::{debug, info};
use smallvec::SmallVec;

use super::draft::{pick_cube, run_draft, CubeChooser, RandomChooser};
use crate::cards::{shuffled_deck, Card, Color, SpecialCardType, SpecialEffect};
use crate::core::{
    Action, ActionRecord, GamePhase, GameRng, GameState, MerchantsConfig, PlayerId, PlayerMap,
    ShipSlot,
};
use crate::error::{MerchantsError, Result};

/// Outcome of a successful delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub color: Color,
    /// Number of cards delivered.
    pub cards: u32,
    /// Coins paid to each player.
    pub payouts: PlayerMap<u32>,
}

/// Rules engine for one game.
#[derive(Debug)]
pub struct GameEngine {
    config: MerchantsConfig,
    state: GameState,
    chooser: Box<dyn CubeChooser>,
}

impl GameEngine {
    /// Start a new game with random cube choices.
    ///
    /// The shuffle and the cube choices use separate streams derived from
    /// `seed`, so the same seed always produces the same game.
    ///
    /// ```
    /// use merchants::core::MerchantsConfig;
    /// use merchants::rules::GameEngine;
    ///
    /// let engine = GameEngine::new_game(MerchantsConfig::new(3), 42).unwrap();
    /// let state = engine.state();
    ///
    /// assert_eq!(state.deck_len(), 45);
    /// assert_eq!(state.marketplace().len(), 6);
    /// ```
    pub fn new_game(config: MerchantsConfig, seed: u64) -> Result<Self> {
        let chooser = RandomChooser::new(GameRng::new(seed).for_context("cubes"));
        Self::with_chooser(config, seed, chooser)
    }

    /// Start a new game, asking `chooser` for every cube pick.
    pub fn with_chooser(
        config: MerchantsConfig,
        seed: u64,
        chooser: impl CubeChooser + 'static,
    ) -> Result<Self> {
        config.validate()?;

        let mut shuffle_rng = GameRng::new(seed).for_context("shuffle");
        let mut state = GameState::new(&config);
        state.deck = shuffled_deck(&config.palette, config.cards_per_color, &mut shuffle_rng)
            .into_iter()
            .collect();

        for player in PlayerId::all(config.player_count) {
            for _ in 0..config.starting_hand_size {
                if let Some(card) = state.deck.pop_back() {
                    state.players[player].hand.push(card);
                }
            }
        }

        for _ in 0..config.market_size {
            if let Some(card) = state.deck.pop_back() {
                state.marketplace.push_back(card);
            }
        }

        let mut chooser: Box<dyn CubeChooser> = Box::new(chooser);
        run_draft(&mut state, chooser.as_mut());

        info!(
            "New game: {} players, seed {seed}, {} cards in deck",
            config.player_count,
            state.deck.len()
        );

        Ok(Self {
            config,
            state,
            chooser,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MerchantsConfig {
        &self.config
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Exchanges the current player may make per turn, or `None` if unlimited.
    #[must_use]
    pub fn exchange_allowance(&self) -> Option<u32> {
        let limit = self.config.exchange_limit?;
        let current = self.state.current();
        let bonus = match self.state.catalog.effect(SpecialCardType::Crane) {
            Some(SpecialEffect::ExtraExchangePerTurn(n)) if current.owns(SpecialCardType::Crane) => n,
            _ => 0,
        };
        Some(limit + bonus)
    }

    /// Player with the most coins. Ties go to the earliest seat.
    #[must_use]
    pub fn get_winner(&self) -> PlayerId {
        self.state
            .players
            .iter()
            .fold((PlayerId::new(0), 0), |best, (id, player)| {
                if id == PlayerId::new(0) || player.coins > best.1 {
                    (id, player.coins)
                } else {
                    best
                }
            })
            .0
    }

    /// Players ordered by coins, most first. Ties keep seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut order: Vec<PlayerId> = PlayerId::all(self.state.player_count()).collect();
        order.sort_by_key(|&id| std::cmp::Reverse(self.state.players[id].coins));
        order
    }

    /// Actions the current player can take right now.
    ///
    /// Purchase phase offers buys and cube exchanges; Deliver phase offers
    /// deliveries and a draw. Ending the phase is always offered. Deliveries
    /// are listed as one per color (every card of that color) plus each
    /// single card, not every subset.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.state.game_ended {
            return Vec::new();
        }

        let state = &self.state;
        let player = state.current();
        let mut actions = Vec::new();

        match state.phase {
            GamePhase::Purchase => {
                for card in SpecialCardType::ALL {
                    if state.catalog.is_available(card) && player.coins >= state.catalog.cost(card) {
                        actions.push(Action::Buy(card));
                    }
                }

                let can_exchange = self
                    .exchange_allowance()
                    .map_or(true, |limit| state.exchanges_this_turn < limit);
                if can_exchange {
                    let available = state.cube_supply.available();
                    for (ship, slot) in player.ships.iter().enumerate() {
                        let Some(cube) = slot.cube else { continue };
                        for &color in available.iter().filter(|&&c| c != cube) {
                            actions.push(Action::Exchange { ship, color });
                        }
                    }
                }
            }
            GamePhase::Deliver => {
                let mut by_color: BTreeMap<Color, SmallVec<[usize; 4]>> = BTreeMap::new();
                for (i, card) in player.hand.iter().enumerate() {
                    by_color.entry(card.color).or_default().push(i);
                }
                for indices in by_color.values() {
                    actions.push(Action::Deliver(indices.clone()));
                    if indices.len() > 1 {
                        actions.extend(indices.iter().map(|&i| Action::deliver(&[i])));
                    }
                }

                if !state.deck.is_empty() && !player.hand_is_full() {
                    actions.push(Action::Draw(self.config.draws_per_turn));
                }
            }
        }

        actions.push(Action::EndPhase);
        actions
    }

    // === Commands ===

    /// Apply a command for the current player.
    pub fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Deliver(indices) => self.make_delivery(indices).map(|_| ()),
            Action::Draw(count) => self.draw_cards(*count).map(|_| ()),
            Action::Exchange { ship, color } => self.exchange_cube(*ship, *color),
            Action::Buy(card) => self.buy_special_card(*card),
            Action::EndPhase => {
                self.next_phase();
                Ok(())
            }
        }
    }

    /// Pop the top card of the deck.
    ///
    /// The card leaves the deck and belongs to the caller. An empty deck
    /// ends the game and reports `DeckExhausted`.
    pub fn draw_card(&mut self) -> Result<Card> {
        match self.state.deck.pop_back() {
            Some(card) => Ok(card),
            None => {
                self.check_game_end();
                Err(MerchantsError::DeckExhausted)
            }
        }
    }

    /// Finish the current phase.
    ///
    /// Purchase moves to Deliver. Deliver moves to the next player's
    /// Purchase phase.
    pub fn next_phase(&mut self) -> GamePhase {
        self.record(Action::EndPhase);

        match self.state.phase {
            GamePhase::Purchase => {
                self.state.phase = GamePhase::Deliver;
            }
            GamePhase::Deliver => {
                let count = self.state.player_count();
                self.state.phase = GamePhase::Purchase;
                self.state.current_player = self.state.current_player.next(count);
                self.state.turn_number += 1;
                self.state.exchanges_this_turn = 0;
            }
        }

        debug!(
            "{} enters {} phase (turn {})",
            self.state.current_player, self.state.phase, self.state.turn_number
        );
        self.state.phase
    }

    /// Deliver same-colored cards from the current player's hand.
    ///
    /// The cards move to the end of the marketplace in hand order. Every
    /// player is then paid one coin per delivered card for each of their
    /// ships carrying that color, plus the Office bonus per card if they
    /// own an Office.
    pub fn make_delivery(&mut self, indices: &[usize]) -> Result<Delivery> {
        self.ensure_running()?;

        let hand = &self.state.current().hand;
        let mut sorted: SmallVec<[usize; 8]> = SmallVec::from_slice(indices);
        sorted.sort_unstable();
        sorted.dedup();

        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return Err(MerchantsError::InvalidSelection);
        };
        if sorted.len() != indices.len() || last >= hand.len() {
            return Err(MerchantsError::InvalidSelection);
        }
        let color = hand[first].color;
        if sorted.iter().any(|&i| hand[i].color != color) {
            return Err(MerchantsError::InvalidSelection);
        }

        let player = self.state.current_mut();
        let mut delivered: SmallVec<[Card; 8]> =
            sorted.iter().rev().map(|&i| player.hand.remove(i)).collect();
        delivered.reverse();
        self.state.marketplace.extend(delivered);

        let cards = sorted.len() as u32;
        let office_bonus = match self.state.catalog.effect(SpecialCardType::Office) {
            Some(SpecialEffect::ExtraCoinsPerDelivery(n)) => n,
            _ => 0,
        };
        let payouts = PlayerMap::new(self.state.player_count(), |id| {
            let player = &self.state.players[id];
            let mut payout = player.ships_carrying(color) * cards;
            if player.owns(SpecialCardType::Office) {
                payout += office_bonus * cards;
            }
            payout
        });
        for (id, player) in self.state.players.iter_mut() {
            player.coins += payouts[id];
        }

        debug!(
            "{} delivered {cards} {color} card(s), payouts {:?}",
            self.state.current_player, payouts
        );
        self.record(Action::deliver(indices));

        Ok(Delivery {
            color,
            cards,
            payouts,
        })
    }

    /// Draw up to `base_count` cards into the current player's hand.
    ///
    /// Forklift adds one card (once, however many are owned). Drawing stops
    /// early when the deck runs out or the hand reaches its limit. Returns
    /// the number of cards drawn.
    pub fn draw_cards(&mut self, base_count: usize) -> Result<usize> {
        self.ensure_running()?;

        let current = self.state.current();
        let bonus = match self.state.catalog.effect(SpecialCardType::Forklift) {
            Some(SpecialEffect::ExtraDrawPerTurn(n)) if current.owns(SpecialCardType::Forklift) => n,
            _ => 0,
        };
        let target = base_count + bonus;

        let mut drawn = 0;
        while drawn < target && !self.state.current().hand_is_full() {
            let Ok(card) = self.draw_card() else { break };
            self.state.current_mut().hand.push(card);
            drawn += 1;
        }

        debug!("{} drew {drawn} of {target} card(s)", self.state.current_player);
        self.record(Action::Draw(base_count));

        if self.state.deck.is_empty() {
            self.check_game_end();
        }
        Ok(drawn)
    }

    /// Draw the standard number of cards for a turn.
    pub fn draw_turn_cards(&mut self) -> Result<usize> {
        self.draw_cards(self.config.draws_per_turn)
    }

    /// Swap the cube on ship `ship_index` for a cube of `new_color`.
    ///
    /// The old cube goes back to supply. Swapping for the same color is
    /// allowed and leaves supply unchanged, but still needs one of that
    /// color in supply.
    pub fn exchange_cube(&mut self, ship_index: usize, new_color: Color) -> Result<()> {
        self.ensure_running()?;

        let old_color = self
            .state
            .current()
            .ships
            .get(ship_index)
            .and_then(|slot| slot.cube)
            .ok_or(MerchantsError::SlotUnavailable)?;

        if let Some(limit) = self.exchange_allowance() {
            if self.state.exchanges_this_turn >= limit {
                return Err(MerchantsError::ExchangeLimitReached);
            }
        }
        if self.state.cube_supply.count(new_color) == 0 {
            return Err(MerchantsError::SupplyExhausted);
        }

        self.state.cube_supply.put_back(old_color);
        self.state.cube_supply.take(new_color);
        self.state.current_mut().ships[ship_index] = ShipSlot::with_cube(new_color);
        self.state.exchanges_this_turn += 1;

        debug!(
            "{} exchanged {old_color} for {new_color} on ship {ship_index}",
            self.state.current_player
        );
        self.record(Action::Exchange {
            ship: ship_index,
            color: new_color,
        });
        Ok(())
    }

    /// Buy a special card for the current player.
    ///
    /// Ship adds a slot holding a cube chosen from supply (empty if supply
    /// has none). Warehouse raises the hand limit. Other cards only matter
    /// through later commands.
    pub fn buy_special_card(&mut self, card: SpecialCardType) -> Result<()> {
        self.ensure_running()?;

        let entry = self
            .state
            .catalog
            .entry(card)
            .copied()
            .ok_or(MerchantsError::SupplyExhausted)?;
        if entry.remaining == 0 {
            return Err(MerchantsError::SupplyExhausted);
        }
        let coins = self.state.current().coins;
        if coins < entry.cost {
            return Err(MerchantsError::InsufficientFunds {
                needed: entry.cost,
                available: coins,
            });
        }

        self.state.catalog.take(card);
        let buyer = self.state.current_player;
        {
            let player = self.state.current_mut();
            player.coins -= entry.cost;
            player.special_cards.push(card);
        }

        match entry.effect {
            SpecialEffect::ExtraShipSlot => {
                let cube = pick_cube(&mut self.state, buyer, self.chooser.as_mut());
                self.state.current_mut().ships.push(ShipSlot { cube });
            }
            SpecialEffect::HandLimitBonus(n) => {
                self.state.current_mut().hand_limit += n;
            }
            SpecialEffect::ExtraCoinsPerDelivery(_)
            | SpecialEffect::ExtraDrawPerTurn(_)
            | SpecialEffect::ExtraExchangePerTurn(_) => {}
        }

        debug!("{buyer} bought {card} for {} coins", entry.cost);
        self.record(Action::Buy(card));
        Ok(())
    }

    /// End the game once the deck is empty. Stays true once set.
    pub fn check_game_end(&mut self) -> bool {
        if !self.state.game_ended && self.state.deck.is_empty() {
            self.state.game_ended = true;
            let winner = self.get_winner();
            info!(
                "Game over after {} turns: {winner} wins with {} coins",
                self.state.turn_number, self.state.players[winner].coins
            );
        }
        self.state.game_ended
    }

    fn ensure_running(&self) -> Result<()> {
        if self.state.game_ended {
            Err(MerchantsError::GameOver)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, action: Action) {
        let sequence = self.state.history.len() as u32;
        self.state.history.push_back(ActionRecord::new(
            self.state.current_player,
            action,
            self.state.turn_number,
            sequence,
        ));
    }
}
