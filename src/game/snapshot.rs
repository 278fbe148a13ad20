//! Read-only view of a game for presentation layers.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Everything a presentation layer renders, captured at one instant.
///
/// The tableau is a persistent vector, so taking a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tableau: Vector<Card>,
    pub draw_pile_count: usize,
    pub score: i64,
    pub set_count: u32,
    pub hint_count: u32,
    pub unnecessary_deal_count: u32,
    pub elapsed_play_time: Duration,
    pub bonus_time_left: Duration,
    pub is_set_available: bool,
    pub is_game_over: bool,
    /// A set was completed by the most recent `choose`.
    pub is_marked_set_visible: bool,
    /// A mismatch was produced by the most recent `choose`.
    pub is_mismatched_set_visible: bool,
}
