//! Pausable play-time accumulator.
//!
//! Pull-based: nothing ticks. Callers pass the current instant and the
//! elapsed total is computed on read.

use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default)]
pub struct PlayTimer {
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl PlayTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring. No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Bank the running interval and pause. No-op if not running.
    pub fn stop(&mut self, now: Instant) {
        if let Some(start) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(start);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Banked time plus the live interval if running.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => self.accumulated + now.saturating_duration_since(start),
            None => self.accumulated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_pairs_accumulate() {
        let t0 = Instant::now();
        let mut timer = PlayTimer::new();

        timer.start(t0);
        timer.stop(t0 + Duration::from_secs(5));
        timer.start(t0 + Duration::from_secs(100));
        timer.stop(t0 + Duration::from_secs(103));

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(500)), Duration::from_secs(8));
    }

    #[test]
    fn test_live_delta_while_running() {
        let t0 = Instant::now();
        let mut timer = PlayTimer::new();

        timer.start(t0);
        timer.stop(t0 + Duration::from_secs(2));
        timer.start(t0 + Duration::from_secs(10));

        assert!(timer.is_running());
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(13)), Duration::from_secs(5));
    }

    #[test]
    fn test_double_start_keeps_first_instant() {
        let t0 = Instant::now();
        let mut timer = PlayTimer::new();

        timer.start(t0);
        timer.start(t0 + Duration::from_secs(4));
        timer.stop(t0 + Duration::from_secs(6));

        assert_eq!(timer.elapsed(t0 + Duration::from_secs(6)), Duration::from_secs(6));
    }

    #[test]
    fn test_stop_without_start_is_noop() {
        let t0 = Instant::now();
        let mut timer = PlayTimer::new();
        timer.stop(t0 + Duration::from_secs(3));
        assert_eq!(timer.elapsed(t0 + Duration::from_secs(3)), Duration::ZERO);
    }
}
