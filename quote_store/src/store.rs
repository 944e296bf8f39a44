//! In-memory quote collection.
//!
//! `QuoteStore` owns the ordered list of quotes and is the only place that
//! mutates it. It exposes five core operations:
//!
//! - `QuoteStore::add(fields)`: validate and append a new quote with a fresh id.
//! - `QuoteStore::update(id, fields)`: replace the fields of an existing quote.
//! - `QuoteStore::delete(id)`: remove a quote; unknown ids are ignored.
//! - `QuoteStore::search(query)`: case-insensitive filter over text and author.
//! - `QuoteStore::list()`: the whole collection in insertion order.
//!
//! Design notes:
//! - Ids come from a counter that only grows, so an id is never handed out twice
//!   even after deletions.
//! - The store is not synchronized; share it across threads through
//!   [`SharedQuoteStore`](crate::shared::SharedQuoteStore).

use std::io::Read;

use log::{debug, warn};

use crate::error::QuoteError;
use crate::quote::{Quote, QuoteFields, QuoteId};
use crate::result::Result;
use crate::search::filter_quotes;

/// First id handed out by an empty store.
const FIRST_ID: QuoteId = 1;

/// Owns the quote collection and the id counter.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    /// Quotes in insertion order.
    quotes: Vec<Quote>,
    /// Id for the next added quote.
    next_id: QuoteId,
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// Create a store holding the two built-in starter quotes.
    pub fn with_defaults() -> Self {
        let defaults = [
            QuoteFields::new("The only impossible journey is the one you never begin.")
                .with_author("Tony Robbins")
                .with_category("Motivation"),
            QuoteFields::new("Life is what happens when you're busy making other plans.")
                .with_author("John Lennon")
                .with_category("Life"),
        ];
        let mut store = Self::new();
        for fields in defaults {
            store.push(fields);
        }
        store
    }

    /// Build a store by adding each entry in order.
    ///
    /// Fails on the first entry without text.
    pub fn from_fields<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = QuoteFields>,
    {
        let mut store = Self::new();
        for fields in entries {
            store.add(fields)?;
        }
        Ok(store)
    }

    /// Build a store from a JSON array of quote fields.
    ///
    /// Each element needs a `text`; `author` and `category` may be omitted.
    pub fn load_seed<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<QuoteFields> = serde_json::from_reader(reader)?;
        Self::from_fields(entries)
    }

    /// Validate `fields` and append a new quote with a fresh id.
    ///
    /// # Errors
    /// Returns [`QuoteError::EmptyText`] if the text is empty; the collection
    /// is left untouched.
    pub fn add(&mut self, fields: QuoteFields) -> Result<Quote> {
        if let Err(e) = fields.validate() {
            warn!("Rejected new quote: {}", e);
            return Err(e);
        }
        Ok(self.push(fields).clone())
    }

    fn push(&mut self, fields: QuoteFields) -> &Quote {
        let id = self.next_id;
        self.next_id += 1;
        self.quotes.push(Quote::new(id, fields));
        debug!("Added quote {}. Total quotes: {}", id, self.quotes.len());
        &self.quotes[self.quotes.len() - 1]
    }

    /// Replace every editable field of quote `id`. The id itself never changes.
    ///
    /// # Errors
    /// Returns [`QuoteError::NotFound`] if no quote has that id, or
    /// [`QuoteError::EmptyText`] if the new text is empty. In both cases the
    /// collection is left untouched.
    pub fn update(&mut self, id: QuoteId, fields: QuoteFields) -> Result<Quote> {
        let Some(quote) = self.quotes.iter_mut().find(|quote| quote.id == id) else {
            warn!("Cannot update quote {}: not found", id);
            return Err(QuoteError::NotFound(id));
        };
        if let Err(e) = fields.validate() {
            warn!("Rejected update of quote {}: {}", id, e);
            return Err(e);
        }
        quote.apply(fields);
        debug!("Updated quote {}", id);
        Ok(quote.clone())
    }

    /// Remove quote `id` and return it. Unknown ids are a no-op.
    pub fn delete(&mut self, id: QuoteId) -> Option<Quote> {
        let index = self.quotes.iter().position(|quote| quote.id == id);
        match index {
            Some(index) => {
                let removed = self.quotes.remove(index);
                debug!("Deleted quote {}. Total quotes: {}", id, self.quotes.len());
                Some(removed)
            }
            None => {
                debug!("Delete of quote {} ignored: not found", id);
                None
            }
        }
    }

    /// Quotes whose text or author contains `query`, ignoring case.
    ///
    /// An empty or absent query returns the whole collection.
    pub fn search(&self, query: Option<&str>) -> Vec<&Quote> {
        filter_quotes(&self.quotes, query)
    }

    /// The whole collection in insertion order.
    pub fn list(&self) -> &[Quote] {
        &self.quotes
    }

    /// Look up a single quote.
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }

    /// Number of quotes held.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the store holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Encode the whole collection as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lennon() -> QuoteFields {
        QuoteFields::new("Life is what happens when you're busy making other plans.")
            .with_author("John Lennon")
            .with_category("Life")
    }

    fn robbins() -> QuoteFields {
        QuoteFields::new("The only impossible journey is the one you never begin.")
            .with_author("Tony Robbins")
            .with_category("Motivation")
    }

    fn ids(quotes: &[Quote]) -> Vec<QuoteId> {
        quotes.iter().map(|quote| quote.id).collect()
    }

    #[test]
    fn add_appends_with_fresh_id() {
        let mut store = QuoteStore::new();

        let first = store.add(lennon()).unwrap();
        let second = store.add(robbins()).unwrap();

        assert_eq!(store.len(), 2);
        assert_ne!(first.id, second.id);
        assert_eq!(store.list()[1], second);
    }

    #[test]
    fn add_with_empty_text_changes_nothing() {
        let mut store = QuoteStore::with_defaults();
        let before = store.list().to_vec();

        let result = store.add(QuoteFields::new("").with_author("Someone"));

        assert!(matches!(result, Err(QuoteError::EmptyText)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn rejected_add_does_not_consume_an_id() {
        let mut store = QuoteStore::new();

        let _ = store.add(QuoteFields::new(""));
        let quote = store.add(lennon()).unwrap();

        assert_eq!(quote.id, FIRST_ID);
    }

    #[test]
    fn update_changes_only_the_target() {
        let mut store = QuoteStore::with_defaults();
        let untouched = store.get(2).unwrap().clone();

        let updated = store
            .update(1, QuoteFields::new("Begin anyway.").with_author("Tony Robbins"))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.text, "Begin anyway.");
        assert_eq!(updated.category, None);
        assert_eq!(store.get(1), Some(&updated));
        assert_eq!(store.get(2), Some(&untouched));
        assert_eq!(ids(store.list()), vec![1, 2]);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut store = QuoteStore::with_defaults();
        let before = store.list().to_vec();

        let result = store.update(99, lennon());

        assert!(matches!(result, Err(QuoteError::NotFound(99))));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn update_with_empty_text_changes_nothing() {
        let mut store = QuoteStore::with_defaults();
        let before = store.list().to_vec();

        let result = store.update(1, QuoteFields::new(""));

        assert!(matches!(result, Err(QuoteError::EmptyText)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = QuoteStore::with_defaults();

        let removed = store.delete(1);

        assert_eq!(removed.map(|quote| quote.id), Some(1));
        assert_eq!(ids(store.list()), vec![2]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut store = QuoteStore::with_defaults();
        let before = store.list().to_vec();

        assert_eq!(store.delete(42), None);
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = QuoteStore::with_defaults();

        store.delete(2);
        let quote = store.add(lennon()).unwrap();

        assert_eq!(quote.id, 3);
        assert_eq!(ids(store.list()), vec![1, 3]);
    }

    #[test]
    fn search_finds_by_text() {
        let mut store = QuoteStore::new();
        store.add(lennon()).unwrap();
        store.add(robbins()).unwrap();

        let found = store.search(Some("life"));

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author.as_deref(), Some("John Lennon"));
    }

    #[test]
    fn search_leaves_collection_intact() {
        let store = QuoteStore::with_defaults();

        assert_eq!(store.search(Some("lennon")).len(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.search(None).len(), 2);
    }

    #[test]
    fn defaults_have_sequential_ids() {
        let store = QuoteStore::with_defaults();

        assert_eq!(ids(store.list()), vec![1, 2]);
        assert_eq!(store.get(1).unwrap().display_author(), "Tony Robbins");
    }

    #[test]
    fn load_seed_reads_json_array() {
        let seed = r#"[
            {"text": "First", "author": "A", "category": "Life"},
            {"text": "Second"}
        ]"#;

        let store = QuoteStore::load_seed(seed.as_bytes()).unwrap();

        assert_eq!(ids(store.list()), vec![1, 2]);
        assert_eq!(store.get(2).unwrap().author, None);
    }

    #[test]
    fn load_seed_rejects_empty_text() {
        let seed = r#"[{"text": "Fine"}, {"text": ""}]"#;

        let result = QuoteStore::load_seed(seed.as_bytes());

        assert!(matches!(result, Err(QuoteError::EmptyText)));
    }

    #[test]
    fn load_seed_rejects_malformed_json() {
        let result = QuoteStore::load_seed("not json".as_bytes());

        assert!(matches!(result, Err(QuoteError::SerdeJson(_))));
    }

    #[test]
    fn to_json_lists_every_quote() {
        let store = QuoteStore::with_defaults();

        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();

        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["author"], "John Lennon");
    }
}
