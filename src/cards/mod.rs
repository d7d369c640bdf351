//! Card system: instances and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: one physical card with its `revealed` / `matched` flags
//! - `DeckBuilder`: validates a symbol set and deals a shuffled deck

pub mod deck;
pub mod instance;

pub use deck::{DeckBuilder, MAX_SYMBOLS};
pub use instance::Card;
