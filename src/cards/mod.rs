//! Card system: attributes, identity and the deck catalog.
//!
//! ## Key Types
//!
//! - `Shape`, `Pattern`, `Color`, `Count`: the four card attributes
//! - `CardId`: Per-game card identity
//! - `SelectionState`: Engine-owned per-card state
//! - `Card`: Attributes plus identity and state
//! - `CardIdAllocator`: Per-game id source
//!
//! [`generate_deck`] builds the 81-card deck.

pub mod attributes;
pub mod card;
pub mod catalog;

pub use attributes::{is_attribute_set, Color, Count, Pattern, Shape};
pub use card::{Card, CardId, SelectionState};
pub use catalog::{generate_deck, CardIdAllocator, DECK_SIZE};
