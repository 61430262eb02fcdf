//! Game rules.
//!
//! - `engine`: `GameEngine`, the command and query surface
//! - `draft`: Snake draft order and the `CubeChooser` seam for cube picks

pub mod draft;
pub mod engine;

pub use draft::{snake_order, CubeChooser, RandomChooser, ScriptedChooser};
pub use engine::{Delivery, GameEngine};
