//! # Memolog
//!
//! Cross-reference engine for short linked notes, plus the `memolog` CLI.
//!
//! This crate re-exports the whole engine:
//! - [`memolog_core`]: notes, links, errors, configuration
//! - [`memolog_parser`]: link extraction and anchor markup
//! - [`memolog_graph`]: reference graph, backlinks and integrity checks
//!
//! ```
//! use memolog::prelude::*;
//!
//! let notes = parse_notes(r#"[
//!     {"id": "a", "content": "links to [[b|Bee]]"},
//!     {"id": "b", "content": "no links"}
//! ]"#).unwrap();
//!
//! assert!(find_orphaned_memos(&notes).is_empty());
//! assert_eq!(get_backlinks("b", &notes)[0].text, "Bee");
//! ```

pub mod output;
pub mod settings;

pub use memolog_core::*;
pub use memolog_graph::{
    BrokenLink, GraphStats, IntegrityReport, LinkGraph, backlinks, build_link_graph,
    check_integrity, check_integrity_with_config, find_broken_links, find_orphaned_memos,
    get_backlinks, get_backlinks_with_context, graph, integrity, preview_window,
};
pub use memolog_parser::{
    create_link, extract_links, extract_links_from_str, highlight_links,
    highlight_links_with_class, links, markup,
};
pub use output::OutputFormat;
pub use settings::load_settings;

pub mod prelude {
    pub use memolog_core::corpus::{load_notes, parse_notes};
    pub use memolog_core::prelude::*;
    pub use memolog_graph::prelude::*;
    pub use memolog_parser::{create_link, extract_links, highlight_links};
}
