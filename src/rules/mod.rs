//! Game rules: the set predicate and hint discovery.

pub mod hints;
pub mod validation;

pub use hints::{find_all_sets, find_first_set, is_set_available, SetIndices};
pub use validation::{is_set, is_valid_set};
