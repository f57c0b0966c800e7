//! Core data models for notes and the references between them.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize (camelCase on the wire)
//! - **Borrow-friendly**: Analysis functions take `&Note` and never mutate it
//! - **Transient**: `Link` and `Backlink` are derived on demand, never stored

use crate::error::{Error, Result};
use crate::validation::is_valid_memo_id;
use serde::{Deserialize, Serialize};

/// A note record as supplied by the external note store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// Unique within one corpus
    pub id: String,
    /// Raw text, may contain `[[id]]` / `[[id|text]]` references
    pub content: String,
}

impl Note {
    /// Create a note without validating its id.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Create a note, rejecting ids that could not be referenced by a link.
    pub fn try_new(id: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_valid_memo_id(&id) {
            return Err(Error::invalid_memo_id(id));
        }
        Ok(Self::new(id, content))
    }
}

/// A parsed reference from one note to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Id of the note containing the reference
    pub source_id: String,
    /// Id referenced (may not exist in the corpus)
    pub target_id: String,
    /// Display text; equals `target_id` for the bare form
    pub text: String,
    /// Positional hint, not populated by extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Link {
    /// Create a link without a positional hint
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            text: text.into(),
            line: None,
        }
    }

    /// Whether the link carries display text distinct from its target
    pub fn has_alias(&self) -> bool {
        self.text != self.target_id
    }
}

/// Reverse view of a link, attached to the note that contains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backlink {
    /// Id of the referencing note
    pub memo_id: String,
    /// Bounded snippet around the link occurrence
    pub preview: String,
    /// Display text of the link
    pub text: String,
}
