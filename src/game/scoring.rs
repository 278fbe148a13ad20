//! Set rewards and the time bonus.
//!
//! A set is worth `base_reward - tableau_len / 3` points, plus a time bonus
//! that decays in steps. With breakpoints `b[0] < b[1] < ... < b[n-1]`, a set
//! found `t` after the previous one earns `(n - i) * bonus_step` for the first
//! `i` where `t < b[i]`, scaled by `base / max_base_reward`. Past the last
//! breakpoint the bonus is zero.

use std::time::Duration;

use crate::core::GameConfig;

/// Reward before the time bonus.
#[must_use]
pub fn base_reward(config: &GameConfig, tableau_len: usize) -> i64 {
    config.base_reward - (tableau_len / 3) as i64
}

/// Unscaled time bonus for a set found `since_last_set` after the previous one.
#[must_use]
pub fn time_bonus(config: &GameConfig, since_last_set: Duration) -> i64 {
    let breakpoints = &config.bonus_breakpoints;
    breakpoints
        .iter()
        .position(|&limit| since_last_set < limit)
        .map_or(0, |index| (breakpoints.len() - index) as i64 * config.bonus_step)
}

/// Total points for a set: base reward plus the scaled time bonus.
#[must_use]
pub fn set_reward(config: &GameConfig, tableau_len: usize, since_last_set: Duration) -> i64 {
    let base = base_reward(config, tableau_len);
    base + time_bonus(config, since_last_set) * base / config.max_base_reward
}

/// Time left before the bonus runs out completely.
#[must_use]
pub fn bonus_time_left(config: &GameConfig, since_last_set: Duration) -> Duration {
    config
        .bonus_breakpoints
        .last()
        .map_or(Duration::ZERO, |last| last.saturating_sub(since_last_set))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_base_reward() {
        let config = GameConfig::default();
        assert_eq!(base_reward(&config, 12), 24);
        assert_eq!(base_reward(&config, 15), 23);
        assert_eq!(base_reward(&config, 3), 27);
        assert_eq!(base_reward(&config, 13), 24);
    }

    #[test]
    fn test_time_bonus_steps() {
        let config = GameConfig::default();
        assert_eq!(time_bonus(&config, Duration::ZERO), 25);
        assert_eq!(time_bonus(&config, Duration::from_millis(14_999)), 25);
        assert_eq!(time_bonus(&config, secs(15)), 20);
        assert_eq!(time_bonus(&config, secs(44)), 15);
        assert_eq!(time_bonus(&config, secs(59)), 10);
        assert_eq!(time_bonus(&config, secs(74)), 5);
        assert_eq!(time_bonus(&config, secs(75)), 0);
        assert_eq!(time_bonus(&config, secs(600)), 0);
    }

    #[test]
    fn test_set_reward_scaling() {
        let config = GameConfig::default();
        // 24 + 25 * 24 / 27
        assert_eq!(set_reward(&config, 12, Duration::ZERO), 46);
        // 27 + 25 * 27 / 27
        assert_eq!(set_reward(&config, 3, Duration::ZERO), 52);
        // 24 + 10 * 24 / 27
        assert_eq!(set_reward(&config, 12, secs(50)), 32);
        assert_eq!(set_reward(&config, 12, secs(90)), 24);
    }

    #[test]
    fn test_bonus_time_left() {
        let config = GameConfig::default();
        assert_eq!(bonus_time_left(&config, secs(10)), secs(65));
        assert_eq!(bonus_time_left(&config, secs(75)), Duration::ZERO);
        assert_eq!(bonus_time_left(&config, secs(200)), Duration::ZERO);
    }
}
