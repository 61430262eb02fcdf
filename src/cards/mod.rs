//! Cards: goods colors, the goods deck, and special cards.
//!
//! ## Key Types
//!
//! - `Color`: Goods color shared by cards and cubes
//! - `Card`: A goods card
//! - `SpecialCardType`: Purchasable upgrade
//! - `SpecialCatalog`: Per-game prices and remaining supply

pub mod card;
pub mod color;
pub mod special;

pub use card::{build_deck, shuffled_deck, Card, CardId};
pub use color::{Color, COLOR_COUNT};
pub use special::{CatalogEntry, SpecialCardType, SpecialCatalog, SpecialEffect};
