//! The fixed 81-card catalog.
//!
//! [`generate_deck`] enumerates shape, then pattern, then color, then count,
//! assigning ids from a per-game [`CardIdAllocator`]. The order is stable so a
//! seeded shuffle is reproducible.

use super::attributes::{Color, Count, Pattern, Shape};
use super::card::{Card, CardId};

/// Number of cards in a full deck (3^4).
pub const DECK_SIZE: usize = 81;

/// Hands out card ids for one game.
///
/// Ids start at 1 and are never reused by the same allocator.
#[derive(Clone, Debug)]
pub struct CardIdAllocator {
    next: u32,
}

impl CardIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate a new card ID.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }
}

impl Default for CardIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one card for every attribute combination, unshuffled.
#[must_use]
pub fn generate_deck(ids: &mut CardIdAllocator) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for shape in Shape::ALL {
        for pattern in Pattern::ALL {
            for color in Color::ALL {
                for count in Count::ALL {
                    deck.push(Card::new(ids.alloc(), shape, pattern, color, count));
                }
            }
        }
    }

    deck
}
