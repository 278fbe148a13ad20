//! Card attributes.
//!
//! Every card has four independent attributes, each with three values:
//!
//! - `Shape`: capsule, diamond, squiggle
//! - `Pattern`: open, striped, solid
//! - `Color`: green, purple, red
//! - `Count`: one, two or three symbols
//!
//! Three cards form a set when, for every attribute, the values are either
//! all equal or all different. [`is_attribute_set`] checks one attribute.

use serde::{Deserialize, Serialize};

/// Symbol shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Capsule,
    Diamond,
    Squiggle,
}

impl Shape {
    /// All shapes in enumeration order.
    pub const ALL: [Shape; 3] = [Shape::Capsule, Shape::Diamond, Shape::Squiggle];
}

/// Symbol fill pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pattern {
    Open,
    Striped,
    Solid,
}

impl Pattern {
    /// All patterns in enumeration order.
    pub const ALL: [Pattern; 3] = [Pattern::Open, Pattern::Striped, Pattern::Solid];
}

/// Symbol color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Green,
    Purple,
    Red,
}

impl Color {
    /// All colors in enumeration order.
    pub const ALL: [Color; 3] = [Color::Green, Color::Purple, Color::Red];
}

/// Number of symbols on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

impl Count {
    /// All counts in enumeration order.
    pub const ALL: [Count; 3] = [Count::One, Count::Two, Count::Three];

    /// Number of symbols, in `1..=3`.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Count::One => 1,
            Count::Two => 2,
            Count::Three => 3,
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// True if the three values are all equal or pairwise distinct.
///
/// ```
/// use set_game::cards::{is_attribute_set, Color};
///
/// assert!(is_attribute_set(Color::Red, Color::Red, Color::Red));
/// assert!(is_attribute_set(Color::Red, Color::Green, Color::Purple));
/// assert!(!is_attribute_set(Color::Red, Color::Red, Color::Green));
/// ```
#[must_use]
pub fn is_attribute_set<T: PartialEq>(a: T, b: T, c: T) -> bool {
    (a == b && b == c) || (a != b && b != c && a != c)
}
