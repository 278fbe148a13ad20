//! Exhaustive set search over the tableau.
//!
//! Both searches visit every unordered triple `i < j < k`, which is
//! O(n^3) in the number of cards. Only run them on the tableau.

use im::Vector;

use super::validation::is_set;
use crate::cards::Card;

/// Tableau positions of three cards.
pub type SetIndices = [usize; 3];

/// First set in lexicographic index order, if any.
#[must_use]
pub fn find_first_set(cards: &Vector<Card>) -> Option<SetIndices> {
    triples(cards.len()).find(|&[i, j, k]| is_set(&cards[i], &cards[j], &cards[k]))
}

/// Every set on the tableau, in lexicographic index order.
#[must_use]
pub fn find_all_sets(cards: &Vector<Card>) -> Vec<SetIndices> {
    triples(cards.len())
        .filter(|&[i, j, k]| is_set(&cards[i], &cards[j], &cards[k]))
        .collect()
}

/// True if at least one set is showing.
#[must_use]
pub fn is_set_available(cards: &Vector<Card>) -> bool {
    find_first_set(cards).is_some()
}

fn triples(n: usize) -> impl Iterator<Item = SetIndices> {
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| (j + 1..n).map(move |k| [i, j, k]))
    })
}
