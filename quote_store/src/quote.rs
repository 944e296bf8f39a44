//! Quote data model.
//!
//! A `Quote` is one entry of the collection: an immutable id plus the editable
//! `QuoteFields` (text, optional author, optional category). Ids are handed out
//! by the store and never change.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Identifier assigned to a quote when it is added.
pub type QuoteId = u64;

/// Author label shown when a quote has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// The editable part of a quote, as submitted to add and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteFields {
    /// Quote text. Required.
    pub text: String,
    /// Who said it, if known.
    pub author: Option<String>,
    /// Free-form category, usually one of [`Category`](crate::category::Category).
    pub category: Option<String>,
}

impl QuoteFields {
    /// Fields with just the text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
            category: None,
        }
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check required fields. Only the text is required.
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(QuoteError::EmptyText);
        }
        Ok(())
    }
}

/// A quote held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique id, assigned on add.
    pub id: QuoteId,
    /// Quote text.
    pub text: String,
    /// Who said it, if known.
    pub author: Option<String>,
    /// Free-form category.
    pub category: Option<String>,
}

impl Quote {
    pub(crate) fn new(id: QuoteId, fields: QuoteFields) -> Self {
        Quote {
            id,
            text: fields.text,
            author: fields.author,
            category: fields.category,
        }
    }

    /// Replace every editable field, keeping the id.
    pub(crate) fn apply(&mut self, fields: QuoteFields) {
        self.text = fields.text;
        self.author = fields.author;
        self.category = fields.category;
    }

    /// Copy of the editable fields, e.g. to prefill an edit form.
    pub fn fields(&self) -> QuoteFields {
        QuoteFields {
            text: self.text.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
        }
    }

    /// Author for display: falls back to "Unknown" when absent or empty.
    pub fn display_author(&self) -> &str {
        match self.author.as_deref() {
            Some(author) if !author.is_empty() => author,
            _ => UNKNOWN_AUTHOR,
        }
    }
}
