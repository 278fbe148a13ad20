//! Card identity and per-card selection state.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Count, Pattern, Shape};

/// Unique identifier for a card within one game.
///
/// Identity is never derived from attributes; two games may reuse the same
/// ids, but within a game every card has its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Selection state of a visible card.
///
/// Owned by the engine; transitions happen in
/// [`SetGame`](crate::game::SetGame), never on the value itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    None,
    Selected,
    /// Part of a completed set, waiting to be acknowledged.
    Matched,
    /// Part of three selected cards that were not a set.
    Mismatched,
    /// Revealed by a hint.
    Hinted,
}

/// A Set card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub shape: Shape,
    pub pattern: Pattern,
    pub color: Color,
    pub count: Count,
    pub selection: SelectionState,
}

impl Card {
    /// Create an unselected card.
    #[must_use]
    pub fn new(id: CardId, shape: Shape, pattern: Pattern, color: Color, count: Count) -> Self {
        Self {
            id,
            shape,
            pattern,
            color,
            count,
            selection: SelectionState::None,
        }
    }

    #[must_use]
    pub fn is(&self, state: SelectionState) -> bool {
        self.selection == state
    }
}
