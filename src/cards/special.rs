//! Special cards: purchasable, limited-supply upgrades.
//!
//! ## Catalog
//!
//! | Card      | Cost | Count | Effect                              |
//! |-----------|------|-------|-------------------------------------|
//! | Ship      | 10   | 14    | One more ship slot                  |
//! | Office    | 10   | 2     | +2 coins per card delivered         |
//! | Warehouse | 10   | 2     | Hand limit +2                       |
//! | Forklift  | 10   | 2     | Draw +1 card                        |
//! | Crane     | 10   | 2     | Exchange +1 cube per turn           |
//!
//! Each game builds its own `SpecialCatalog`, so remaining counts are never
//! shared between games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Special card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialCardType {
    Ship,
    Office,
    Warehouse,
    Forklift,
    Crane,
}

impl SpecialCardType {
    pub const ALL: [SpecialCardType; 5] = [
        SpecialCardType::Ship,
        SpecialCardType::Office,
        SpecialCardType::Warehouse,
        SpecialCardType::Forklift,
        SpecialCardType::Crane,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpecialCardType::Ship => "Ship",
            SpecialCardType::Office => "Office",
            SpecialCardType::Warehouse => "Warehouse",
            SpecialCardType::Forklift => "Forklift",
            SpecialCardType::Crane => "Crane",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SpecialCardType::Ship => "Hold one more cube",
            SpecialCardType::Office => "2 extra coins per card delivered",
            SpecialCardType::Warehouse => "Hand size +2",
            SpecialCardType::Forklift => "Draw +1 card",
            SpecialCardType::Crane => "Exchange +1 cube",
        }
    }
}

impl std::fmt::Display for SpecialCardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What owning a special card does.
///
/// `ExtraShipSlot` and `HandLimitBonus` apply once at purchase. The rest are
/// read by the rules whenever they apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEffect {
    ExtraShipSlot,
    /// Flat bonus per card delivered.
    ExtraCoinsPerDelivery(u32),
    HandLimitBonus(usize),
    ExtraDrawPerTurn(usize),
    ExtraExchangePerTurn(u32),
}

impl SpecialEffect {
    /// Does this effect change the player's board at purchase time?
    #[must_use]
    pub const fn is_immediate(self) -> bool {
        matches!(self, SpecialEffect::ExtraShipSlot | SpecialEffect::HandLimitBonus(_))
    }
}

/// Catalog entry: static price and effect plus remaining supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub cost: u32,
    pub remaining: u32,
    pub effect: SpecialEffect,
}

/// Per-game catalog of special cards.
///
/// ```
/// use merchants::cards::{SpecialCatalog, SpecialCardType};
///
/// let mut catalog = SpecialCatalog::standard();
/// assert_eq!(catalog.remaining(SpecialCardType::Office), 2);
/// assert!(catalog.take(SpecialCardType::Office));
/// assert!(catalog.take(SpecialCardType::Office));
/// assert!(!catalog.take(SpecialCardType::Office));
/// assert!(!catalog.is_available(SpecialCardType::Office));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCatalog {
    entries: FxHashMap<SpecialCardType, CatalogEntry>,
}

impl SpecialCatalog {
    /// Build the standard catalog with full supply.
    #[must_use]
    pub fn standard() -> Self {
        let mut entries: FxHashMap<SpecialCardType, CatalogEntry> = FxHashMap::default();
        let mut add = |card: SpecialCardType, cost: u32, remaining: u32, effect: SpecialEffect| {
            entries.insert(card, CatalogEntry { cost, remaining, effect });
        };

        add(SpecialCardType::Ship, 10, 14, SpecialEffect::ExtraShipSlot);
        add(SpecialCardType::Office, 10, 2, SpecialEffect::ExtraCoinsPerDelivery(2));
        add(SpecialCardType::Warehouse, 10, 2, SpecialEffect::HandLimitBonus(2));
        add(SpecialCardType::Forklift, 10, 2, SpecialEffect::ExtraDrawPerTurn(1));
        add(SpecialCardType::Crane, 10, 2, SpecialEffect::ExtraExchangePerTurn(1));

        Self { entries }
    }

    /// Get the catalog entry for a card type.
    #[must_use]
    pub fn entry(&self, card: SpecialCardType) -> Option<&CatalogEntry> {
        self.entries.get(&card)
    }

    #[must_use]
    pub fn cost(&self, card: SpecialCardType) -> u32 {
        self.entry(card).map_or(0, |e| e.cost)
    }

    #[must_use]
    pub fn remaining(&self, card: SpecialCardType) -> u32 {
        self.entry(card).map_or(0, |e| e.remaining)
    }

    #[must_use]
    pub fn effect(&self, card: SpecialCardType) -> Option<SpecialEffect> {
        self.entry(card).map(|e| e.effect)
    }

    #[must_use]
    pub fn is_available(&self, card: SpecialCardType) -> bool {
        self.remaining(card) > 0
    }

    /// Remove one copy from supply. Returns false if sold out.
    pub fn take(&mut self, card: SpecialCardType) -> bool {
        match self.entries.get_mut(&card) {
            Some(entry) if entry.remaining > 0 => {
                entry.remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

impl Default for SpecialCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
