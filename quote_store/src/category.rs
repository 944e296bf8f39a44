//! Known quote categories.
//!
//! The set is advisory: the store keeps whatever category string it is given,
//! and `Category` only names the values the shell offers and recognises.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Set of categories offered when adding or editing a quote.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Motivation,
    Life,
    Happiness,
}

impl Category {
    /// All known categories in display order.
    pub fn all() -> Vec<Category> {
        Category::iter().collect()
    }

    /// Resolve a free-form category string, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Category> {
        label.trim().parse().ok()
    }
}
