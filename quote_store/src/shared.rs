//! Thread-safe handle around a [`QuoteStore`].
//!
//! Every operation takes the one lock for its whole duration. Results are
//! returned as owned clones because borrows cannot outlive the guard.

use std::sync::{Arc, Mutex};

use crate::quote::{Quote, QuoteFields, QuoteId};
use crate::result::Result;
use crate::store::QuoteStore;

/// Cloneable, mutex-guarded quote store. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct SharedQuoteStore {
    inner: Arc<Mutex<QuoteStore>>,
}

impl From<QuoteStore> for SharedQuoteStore {
    fn from(store: QuoteStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }
}

impl SharedQuoteStore {
    /// Wrap an existing store.
    pub fn new(store: QuoteStore) -> Self {
        Self::from(store)
    }

    /// See [`QuoteStore::add`].
    pub fn add(&self, fields: QuoteFields) -> Result<Quote> {
        self.inner.lock()?.add(fields)
    }

    /// See [`QuoteStore::update`].
    pub fn update(&self, id: QuoteId, fields: QuoteFields) -> Result<Quote> {
        self.inner.lock()?.update(id, fields)
    }

    /// See [`QuoteStore::delete`].
    pub fn delete(&self, id: QuoteId) -> Result<Option<Quote>> {
        Ok(self.inner.lock()?.delete(id))
    }

    /// See [`QuoteStore::search`].
    pub fn search(&self, query: Option<&str>) -> Result<Vec<Quote>> {
        let store = self.inner.lock()?;
        Ok(store.search(query).into_iter().cloned().collect())
    }

    /// Snapshot of the whole collection.
    pub fn list(&self) -> Result<Vec<Quote>> {
        Ok(self.inner.lock()?.list().to_vec())
    }

    /// See [`QuoteStore::get`].
    pub fn get(&self, id: QuoteId) -> Result<Option<Quote>> {
        Ok(self.inner.lock()?.get(id).cloned())
    }

    /// Number of quotes held.
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.lock()?.len())
    }

    /// Whether the store holds no quotes.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner.lock()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use super::*;
    use crate::error::QuoteError;

    #[test]
    fn clones_share_the_collection() {
        let store = SharedQuoteStore::new(QuoteStore::new());
        let other = store.clone();

        let quote = store.add(QuoteFields::new("Shared")).unwrap();

        assert_eq!(other.get(quote.id).unwrap(), Some(quote));
    }

    #[test]
    fn concurrent_adds_get_unique_ids() {
        let store = SharedQuoteStore::default();

        let handles: Vec<_> = (0..8)
            .map(|thread_index| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|n| {
                            store
                                .add(QuoteFields::new(format!("quote {thread_index}-{n}")))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<QuoteId> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 200);
        assert_eq!(store.len().unwrap(), 200);
    }

    #[test]
    fn errors_pass_through() {
        let store = SharedQuoteStore::from(QuoteStore::with_defaults());

        assert!(matches!(store.add(QuoteFields::new("")), Err(QuoteError::EmptyText)));
        assert!(matches!(
            store.update(9, QuoteFields::new("x")),
            Err(QuoteError::NotFound(9))
        ));
        assert_eq!(store.delete(9).unwrap(), None);
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn search_returns_owned_matches() {
        let store = SharedQuoteStore::from(QuoteStore::with_defaults());

        let found = store.search(Some("JOURNEY")).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn poisoned_lock_maps_to_mutex_error() {
        let store = SharedQuoteStore::default();
        let poisoner = store.clone();

        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(store.list(), Err(QuoteError::MutexLock(_))));
    }
}
