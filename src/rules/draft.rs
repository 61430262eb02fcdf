//! Cube choices: the opening snake draft and ship purchases.
//!
//! Whenever a player gains a cube from supply, the engine asks a
//! `CubeChooser` which color to take. Tests use `ScriptedChooser` for
//! deterministic picks; simulations use `RandomChooser`; a multiplayer UI
//! can plug in a chooser that asks the seated player.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::cards::Color;
use crate::core::{GameRng, GameState, Player, PlayerId, ShipSlot};

/// Picks cube colors on behalf of players.
pub trait CubeChooser: std::fmt::Debug {
    /// Choose a color for `player` from `available` (never empty).
    ///
    /// Returning `None`, or a color not in `available`, forfeits the pick.
    fn choose_cube(&mut self, player: &Player, available: &[Color]) -> Option<Color>;
}

/// Uniform random choice from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
}

impl RandomChooser {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl CubeChooser for RandomChooser {
    fn choose_cube(&mut self, _player: &Player, available: &[Color]) -> Option<Color> {
        self.rng.choose(available).copied()
    }
}

/// Replays a fixed list of colors, one per pick.
///
/// Once the script runs out, picks the first available color.
///
/// ```
/// use merchants::cards::Color;
/// use merchants::core::{Player, PlayerId};
/// use merchants::rules::{CubeChooser, ScriptedChooser};
///
/// let player = Player::new(PlayerId::new(0), "Ada", 2, 6);
/// let mut chooser = ScriptedChooser::new([Color::Red]);
///
/// assert_eq!(chooser.choose_cube(&player, &[Color::Blue, Color::Red]), Some(Color::Red));
/// assert_eq!(chooser.choose_cube(&player, &[Color::Blue, Color::Red]), Some(Color::Blue));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    picks: VecDeque<Color>,
}

impl ScriptedChooser {
    pub fn new(picks: impl IntoIterator<Item = Color>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Scripted picks not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl CubeChooser for ScriptedChooser {
    fn choose_cube(&mut self, _player: &Player, available: &[Color]) -> Option<Color> {
        self.picks.pop_front().or_else(|| available.first().copied())
    }
}

/// Draft order for the opening cube draft.
///
/// Two rounds: last seat to first, then first seat to last, so the player
/// who picks last in the first round picks first in the second.
///
/// ```
/// use merchants::core::PlayerId;
/// use merchants::rules::snake_order;
///
/// let order: Vec<u8> = snake_order(3).into_iter().map(|p| p.0).collect();
/// assert_eq!(order, vec![2, 1, 0, 0, 1, 2]);
/// ```
#[must_use]
pub fn snake_order(player_count: usize) -> Vec<PlayerId> {
    PlayerId::all(player_count)
        .rev()
        .chain(PlayerId::all(player_count))
        .collect()
}

/// Ask `chooser` for a cube for `player` and take it from supply.
///
/// Returns `None` without touching state when supply is empty or the
/// chooser forfeits.
pub(crate) fn pick_cube(
    state: &mut GameState,
    player: PlayerId,
    chooser: &mut dyn CubeChooser,
) -> Option<Color> {
    let available = state.cube_supply.available();
    if available.is_empty() {
        return None;
    }

    let color = chooser.choose_cube(&state.players[player], &available)?;
    if !available.contains(&color) {
        warn!("{player} chose unavailable cube color {color}, pick skipped");
        return None;
    }

    state.cube_supply.take(color).then_some(color)
}

/// Run the opening snake draft.
///
/// Each pick places a cube in the player's first empty ship slot. Picks for
/// players with no empty slot, or made after supply runs dry, are skipped.
pub(crate) fn run_draft(state: &mut GameState, chooser: &mut dyn CubeChooser) {
    for player in snake_order(state.player_count()) {
        let Some(slot) = state.players[player].first_empty_slot() else {
            debug!("{player} has no empty ship slot, draft pick skipped");
            continue;
        };

        if let Some(color) = pick_cube(state, player, chooser) {
            state.players[player].ships[slot] = ShipSlot::with_cube(color);
            debug!("{player} drafted a {color} cube into ship {slot}");
        }
    }
}
