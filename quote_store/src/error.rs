//! Error types shared by the store and the shell.
//!
//! The `QuoteError` enum covers the two domain failures of the store (an empty
//! required field and an unknown id) together with the I/O, JSON and locking
//! failures that appear around it, so every crate in the workspace can
//! propagate a single error type with `?`.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

use crate::quote::QuoteId;

/// Unified error type shared by the store and the shell.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A quote was submitted without text. Nothing was changed.
    #[error("Validation error: quote text is required")]
    EmptyText,

    /// An operation targeted an id that is not in the collection.
    #[error("Quote not found: {0}")]
    NotFound(QuoteId),

    /// I/O error while reading a seed file or a command script.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Malformed user input with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
