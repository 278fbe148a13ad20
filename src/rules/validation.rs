//! Set validation.

use im::Vector;

use crate::cards::{is_attribute_set, Card};

/// True if the three cards form a set on all four attributes.
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    is_attribute_set(a.shape, b.shape, c.shape)
        && is_attribute_set(a.color, b.color, c.color)
        && is_attribute_set(a.count, b.count, c.count)
        && is_attribute_set(a.pattern, b.pattern, c.pattern)
}

/// True if exactly three distinct, in-range indices name a set on `cards`.
///
/// Any other input (wrong length, repeated or out-of-range index) is simply
/// not a set.
#[must_use]
pub fn is_valid_set(cards: &Vector<Card>, indices: &[usize]) -> bool {
    let [i, j, k] = match indices {
        &[i, j, k] => [i, j, k],
        _ => return false,
    };
    if i == j || j == k || i == k {
        return false;
    }
    match (cards.get(i), cards.get(j), cards.get(k)) {
        (Some(a), Some(b), Some(c)) => is_set(a, b, c),
        _ => false,
    }
}
