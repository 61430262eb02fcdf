//! Self-play driver.
//!
//! Plays whole games through the public command surface, one action at a
//! time, the same way a UI would. Used by the `merchants-sim` binary and the
//! benchmarks, and handy for shaking out rule bugs over many seeds.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Action, GameRng, GameState, MerchantsConfig};
use crate::error::Result;
use crate::rules::GameEngine;

/// Picks one of the legal actions.
pub trait Policy {
    /// Return an index into `actions` (never empty).
    fn select(&mut self, state: &GameState, actions: &[Action]) -> usize;
}

/// Uniform random choice.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn select(&mut self, _state: &GameState, actions: &[Action]) -> usize {
        self.rng.gen_range_usize(0..actions.len())
    }
}

/// Buy when affordable, deliver the biggest set, otherwise draw, then pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn select(&mut self, _state: &GameState, actions: &[Action]) -> usize {
        let score = |action: &Action| match action {
            Action::Buy(_) => 100,
            Action::Deliver(cards) => 10 + cards.len(),
            Action::Draw(_) => 5,
            Action::Exchange { .. } => 0,
            Action::EndPhase => 1,
        };

        actions
            .iter()
            .enumerate()
            .max_by_key(|(i, a)| (score(a), std::cmp::Reverse(*i)))
            .map_or(0, |(i, _)| i)
    }
}

/// Result of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub players: usize,
    pub ended: bool,
    pub turns: u32,
    pub actions: usize,
    /// Seat index of the winner.
    pub winner: u8,
    pub coins: Vec<u32>,
    pub marketplace: usize,
}

/// Play one game with `policy`, stopping after `max_actions` actions if the
/// deck has not run out by then.
pub fn play_game(
    config: MerchantsConfig,
    seed: u64,
    max_actions: usize,
    policy: &mut dyn Policy,
) -> Result<GameSummary> {
    let mut engine = GameEngine::new_game(config, seed)?;
    let mut actions_taken = 0;

    while actions_taken < max_actions && !engine.check_game_end() {
        let legal = engine.legal_actions();
        if legal.is_empty() {
            break;
        }

        let choice = policy.select(engine.state(), &legal).min(legal.len() - 1);
        let action = &legal[choice];
        if let Err(err) = engine.apply(action) {
            warn!("Legal action {action:?} rejected: {err}");
            engine.next_phase();
        } else if *action != Action::EndPhase {
            // One command per phase.
            engine.next_phase();
        }
        actions_taken += 1;
    }

    let state = engine.state();
    let summary = GameSummary {
        seed,
        players: state.player_count(),
        ended: state.is_ended(),
        turns: state.turn_number(),
        actions: actions_taken,
        winner: engine.get_winner().0,
        coins: state.players().values().map(|p| p.coins).collect(),
        marketplace: state.marketplace().len(),
    };
    debug!("Game {seed} finished: {summary:?}");
    Ok(summary)
}

/// Play one game with uniformly random actions.
pub fn play_random_game(
    config: MerchantsConfig,
    seed: u64,
    max_actions: usize,
) -> Result<GameSummary> {
    let mut policy = RandomPolicy::new(GameRng::new(seed).for_context("policy"));
    play_game(config, seed, max_actions, &mut policy)
}
