//! Game configuration.
//!
//! Every tunable constant of the rules lives here: tableau size, penalties,
//! rewards and the time-bonus breakpoints. Defaults are the standard values.
//!
//! ```
//! use std::time::Duration;
//! use set_game::core::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_mismatch_penalty(5)
//!     .with_bonus_breakpoints(vec![Duration::from_secs(20), Duration::from_secs(40)]);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::SetGameError;

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Target number of visible cards.
    pub tableau_size: usize,

    /// Points lost for selecting three cards that are not a set.
    pub mismatch_penalty: i64,

    /// Points lost for dealing while a set is already showing on a full tableau.
    pub deal_penalty: i64,

    /// Points lost per card revealed by a hint.
    pub hint_penalty: i64,

    /// Reward before the tableau-size deduction (`base_reward - tableau / 3`).
    pub base_reward: i64,

    /// Largest attainable base reward; the time bonus is scaled by
    /// `base / max_base_reward`.
    pub max_base_reward: i64,

    /// Ascending time limits for the time bonus.
    pub bonus_breakpoints: Vec<Duration>,

    /// Bonus points per remaining breakpoint.
    pub bonus_step: i64,

    /// How many cards of the found set `hint` reveals.
    pub hint_reveal_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tableau_size: 12,
            mismatch_penalty: 10,
            deal_penalty: 10,
            hint_penalty: 10,
            base_reward: 28,
            max_base_reward: 27,
            bonus_breakpoints: [15, 30, 45, 60, 75].into_iter().map(Duration::from_secs).collect(),
            bonus_step: 5,
            hint_reveal_count: 1,
        }
    }
}

impl GameConfig {
    /// Set the target tableau size.
    #[must_use]
    pub fn with_tableau_size(mut self, size: usize) -> Self {
        self.tableau_size = size;
        self
    }

    /// Set the mismatch penalty.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        self.mismatch_penalty = penalty;
        self
    }

    /// Set the unnecessary-deal penalty.
    #[must_use]
    pub fn with_deal_penalty(mut self, penalty: i64) -> Self {
        self.deal_penalty = penalty;
        self
    }

    /// Set the per-card hint penalty.
    #[must_use]
    pub fn with_hint_penalty(mut self, penalty: i64) -> Self {
        self.hint_penalty = penalty;
        self
    }

    /// Set the time-bonus breakpoints.
    #[must_use]
    pub fn with_bonus_breakpoints(mut self, breakpoints: Vec<Duration>) -> Self {
        self.bonus_breakpoints = breakpoints;
        self
    }

    /// Set the number of cards revealed per hint.
    #[must_use]
    pub fn with_hint_reveal_count(mut self, count: usize) -> Self {
        self.hint_reveal_count = count;
        self
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), SetGameError> {
        if self.tableau_size == 0 || self.tableau_size % 3 != 0 {
            return Err(SetGameError::InvalidConfig(format!(
                "tableau size must be a positive multiple of 3, got {}",
                self.tableau_size
            )));
        }
        if self.max_base_reward <= 0 {
            return Err(SetGameError::InvalidConfig(
                "max base reward must be positive".to_string(),
            ));
        }
        if self.bonus_breakpoints.is_empty() {
            return Err(SetGameError::InvalidConfig(
                "at least one bonus breakpoint is required".to_string(),
            ));
        }
        if self.bonus_breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SetGameError::InvalidConfig(
                "bonus breakpoints must be strictly ascending".to_string(),
            ));
        }
        if !(1..=3).contains(&self.hint_reveal_count) {
            return Err(SetGameError::InvalidConfig(format!(
                "hint reveal count must be 1..=3, got {}",
                self.hint_reveal_count
            )));
        }
        Ok(())
    }
}
