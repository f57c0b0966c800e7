//! # Memolog Parser
//!
//! Link syntax for short linked notes:
//!
//! - Bare links: `[[note-id]]`
//! - Piped links: `[[note-id|display text]]`
//!
//! Ids match `[a-zA-Z0-9-]+`. Display text is any non-empty run of characters
//! other than `]`.
//!
//! ## Quick Start
//!
//! ```
//! use memolog_core::Note;
//! use memolog_parser::{create_link, extract_links, highlight_links};
//!
//! let note = Note::new("today", format!("Follow up on {}", create_link("plan-q3", Some("the plan"))));
//! let links = extract_links(&note);
//! assert_eq!(links[0].target_id, "plan-q3");
//! assert_eq!(links[0].text, "the plan");
//!
//! let html = highlight_links(&note.content);
//! assert!(html.contains(r#"data-memo-id="plan-q3""#));
//! ```
//!
//! ## Performance
//!
//! - `std::sync::LazyLock` for compiled regex patterns
//! - A `[[` pre-filter skips the regex entirely for link-free text

pub mod links;
pub mod markup;

pub use links::{create_link, extract_links, extract_links_from_str};
pub use markup::{highlight_links, highlight_links_with_class};
pub use memolog_core::is_valid_memo_id;

/// Convenient prelude for common imports.
pub mod prelude {
    pub use memolog_core::{Link, Note, is_valid_memo_id};

    pub use crate::{
        create_link, extract_links, extract_links_from_str, highlight_links,
        highlight_links_with_class,
    };
}
