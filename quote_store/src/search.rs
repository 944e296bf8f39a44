//! Case-insensitive search over a quote collection.
//!
//! Filtering never touches the source collection: it borrows the quotes and
//! returns the matching subsequence in the original order.

use crate::quote::Quote;

impl Quote {
    /// Whether `text` or `author` contains the already lowercased `needle`.
    fn contains_lowered(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
            || self
                .author
                .as_deref()
                .is_some_and(|author| author.to_lowercase().contains(needle))
    }
}

/// Return the quotes matching `query`, in collection order.
///
/// `None` and `Some("")` both return the whole collection.
pub fn filter_quotes<'a>(quotes: &'a [Quote], query: Option<&str>) -> Vec<&'a Quote> {
    match query {
        Some(query) if !query.is_empty() => {
            let needle = query.to_lowercase();
            quotes
                .iter()
                .filter(|quote| quote.contains_lowered(&needle))
                .collect()
        }
        _ => quotes.iter().collect(),
    }
}
