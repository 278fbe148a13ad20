//! Error types.
//!
//! Gameplay operations never fail; invalid references and exhausted piles
//! are silently ignored. Errors only arise when building a game from an
//! inconsistent [`GameConfig`](super::GameConfig).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetGameError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
