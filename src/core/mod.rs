//! Core building blocks: configuration, RNG, time and errors.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GameConfig;
pub use error::SetGameError;
pub use rng::GameRng;
