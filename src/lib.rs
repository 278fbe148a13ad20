//! # set-game
//!
//! Rules engine for Set, the pattern-matching card game.
//!
//! Each card shows one to three symbols with a shape, a fill pattern and a
//! color. Three cards form a *set* when every attribute is either the same
//! on all three or different on all three.
//!
//! ## Design Principles
//!
//! 1. **Rendering-agnostic**: The engine exposes plain data and commands.
//!    Presentation, audio and persistence live with the caller.
//!
//! 2. **Deterministic**: Shuffles come from a seeded RNG and time comes from
//!    an injectable [`Clock`](core::Clock), so every game can be replayed.
//!
//! 3. **Configuration Over Constants**: Penalties, rewards and bonus
//!    breakpoints live in [`GameConfig`](core::GameConfig).
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, clocks, errors
//! - `cards`: Card attributes, identity and the 81-card catalog
//! - `rules`: Set validation and exhaustive hint search
//! - `game`: The `SetGame` engine, scoring, timing and snapshots

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Clock, GameConfig, GameRng, ManualClock, SetGameError, SystemClock};

pub use crate::cards::{
    generate_deck, is_attribute_set, Card, CardId, CardIdAllocator, Color, Count, Pattern,
    SelectionState, Shape, DECK_SIZE,
};

pub use crate::rules::{find_all_sets, find_first_set, is_set, is_valid_set, SetIndices};

pub use crate::game::{GameSnapshot, HighScore, PlayTimer, SetGame};
