//!
//! In-memory quote collection shared by the quote shell and any other front end.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `category` — the known category set offered to users.
//! - `quote` — the `Quote` record and its editable `QuoteFields`.
//! - `search` — pure case-insensitive filtering over a collection.
//! - `store` — `QuoteStore`, the owner of the collection.
//! - `shared` — `SharedQuoteStore`, a mutex-guarded handle for threaded hosts.
#![warn(missing_docs)]
pub mod category;
pub mod error;
pub mod quote;
pub mod result;
pub mod search;
pub mod shared;
pub mod store;

pub use category::Category;
pub use error::QuoteError;
pub use quote::{Quote, QuoteFields, QuoteId};
pub use result::Result;
pub use shared::SharedQuoteStore;
pub use store::QuoteStore;
