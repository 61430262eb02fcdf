//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Indices are 0-based.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A merchant's board: coins, hand, ships with their cubes, and owned
//! special cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Color, SpecialCardType};

/// Player identifier supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use merchants::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl DoubleEndedIterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The player after this one in seating order.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use merchants::core::{PlayerId, PlayerMap};
///
/// let mut coins: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// coins[PlayerId::new(1)] += 6;
/// assert_eq!(coins[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A ship slot holds at most one cube.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSlot {
    pub cube: Option<Color>,
}

impl ShipSlot {
    #[must_use]
    pub const fn empty() -> Self {
        Self { cube: None }
    }

    #[must_use]
    pub const fn with_cube(color: Color) -> Self {
        Self { cube: Some(color) }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cube.is_none()
    }

    #[must_use]
    pub fn carries(&self, color: Color) -> bool {
        self.cube == Some(color)
    }
}

/// Ships per player. Most players never buy more than a couple.
pub type Ships = SmallVec<[ShipSlot; 4]>;

/// A player's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub coins: u32,
    pub hand: Vec<Card>,
    pub ships: Ships,
    /// Owned special cards in purchase order.
    pub special_cards: Vec<SpecialCardType>,
    pub hand_limit: usize,
}

impl Player {
    /// Create a player with empty ships and an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, ship_slots: usize, hand_limit: usize) -> Self {
        Self {
            id,
            name: name.into(),
            coins: 0,
            hand: Vec::new(),
            ships: std::iter::repeat(ShipSlot::empty()).take(ship_slots).collect(),
            special_cards: Vec::new(),
            hand_limit,
        }
    }

    /// Does this player own at least one copy of `card`?
    #[must_use]
    pub fn owns(&self, card: SpecialCardType) -> bool {
        self.special_cards.contains(&card)
    }

    /// Number of ships carrying a cube of `color`.
    #[must_use]
    pub fn ships_carrying(&self, color: Color) -> u32 {
        self.ships.iter().filter(|s| s.carries(color)).count() as u32
    }

    #[must_use]
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.ships.iter().position(ShipSlot::is_empty)
    }

    /// Colors of all cubes on this player's ships.
    pub fn cubes(&self) -> impl Iterator<Item = Color> + '_ {
        self.ships.iter().filter_map(|s| s.cube)
    }

    #[must_use]
    pub fn hand_is_full(&self) -> bool {
        self.hand.len() >= self.hand_limit
    }
}
