//! Player commands and action history.
//!
//! `Action` is the command surface as data: a UI or a simulation driver can
//! build one and hand it to `GameEngine::apply`. Every successful command is
//! logged as an `ActionRecord`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Color, SpecialCardType};

/// Hand positions selected for a delivery.
pub type CardSelection = SmallVec<[usize; 4]>;

/// A player command.
///
/// ```
/// use merchants::core::Action;
///
/// let deliver = Action::deliver(&[0, 2]);
/// assert_eq!(deliver, Action::Deliver(smallvec::smallvec![0, 2]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Deliver same-colored cards from hand into the marketplace.
    Deliver(CardSelection),
    /// Draw up to this many cards (before bonuses).
    Draw(usize),
    /// Swap the cube on a ship for one of another color from supply.
    Exchange { ship: usize, color: Color },
    Buy(SpecialCardType),
    /// Finish the current phase.
    EndPhase,
}

impl Action {
    #[must_use]
    pub fn deliver(indices: &[usize]) -> Self {
        Action::Deliver(SmallVec::from_slice(indices))
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
