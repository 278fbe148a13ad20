//! High score tracking.
//!
//! Storage is the caller's concern; this only decides when the stored value
//! needs to be written.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore(i64);

impl HighScore {
    /// Start from a previously persisted value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Record a score. Returns true if it beat the current high score.
    pub fn record(&mut self, score: i64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}
