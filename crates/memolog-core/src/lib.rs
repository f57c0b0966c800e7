//! # Memolog Core
//!
//! Core data models, error types, and configuration for the Memolog
//! cross-reference engine. This crate defines the canonical types that all
//! other crates depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Notes, links and backlinks
//! - [`error`] - Error types and Result alias
//! - [`config`] - Analysis configuration
//! - [`corpus`] - Loading note corpora from JSON
//! - [`validation`] - Memo id validation
//!
//! ## Usage Examples
//!
//! ```
//! use memolog_core::prelude::*;
//!
//! let note = Note::try_new("daily-1", "Met with [[alice]] today").unwrap();
//! assert_eq!(note.id, "daily-1");
//!
//! let err = Note::try_new("not valid", "").unwrap_err();
//! assert!(matches!(err, Error::InvalidMemoId { .. }));
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod validation;

pub use config::{AnalysisConfig, DEFAULT_CONTEXT_LENGTH, DEFAULT_LINK_CLASS};
pub use corpus::{ensure_unique_ids, load_notes, parse_notes};
pub use error::{Error, Result};
pub use models::{Backlink, Link, Note};
pub use validation::is_valid_memo_id;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::{Backlink, Link, Note};
    pub use crate::validation::is_valid_memo_id;
}
