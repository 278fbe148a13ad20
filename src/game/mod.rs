//! The game engine and its supporting pieces.
//!
//! - `SetGame`: Owns the game state and applies every transition
//! - `scoring`: Set rewards and the decaying time bonus
//! - `PlayTimer`: Pausable play-time accumulator
//! - `GameSnapshot`: Read-only copy of observable state
//! - `HighScore`: Decides when a persisted high score needs updating

pub mod engine;
pub mod high_score;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use engine::SetGame;
pub use high_score::HighScore;
pub use snapshot::GameSnapshot;
pub use timer::PlayTimer;
