//! # Memolog Graph
//!
//! Corpus-wide analysis of links between memos. Every function takes the full
//! note collection and recomputes its result from scratch; nothing is cached
//! between calls.
//!
//! Provides:
//! - Reference graph (note id → ordered target ids)
//! - Backlinks with contextual previews
//! - Orphan detection
//! - Broken link detection with suggestions
//! - Integrity report with a health score
//!
//! ## Quick Start
//!
//! ```
//! use memolog_core::Note;
//! use memolog_graph::{build_link_graph, check_integrity, get_backlinks};
//!
//! let notes = vec![
//!     Note::new("inbox", "Triage [[todo-1]] and [[todo-2|the other one]]"),
//!     Note::new("todo-1", "Write the report"),
//! ];
//!
//! let graph = build_link_graph(&notes);
//! assert_eq!(graph.outgoing("inbox").unwrap(), ["todo-1", "todo-2"]);
//!
//! let backlinks = get_backlinks("todo-1", &notes);
//! assert_eq!(backlinks[0].memo_id, "inbox");
//!
//! let report = check_integrity(&notes);
//! assert_eq!(report.broken_links[0].target_id, "todo-2");
//! ```
//!
//! ## Performance Characteristics
//!
//! - Graph construction: O(total content length)
//! - Backlinks, orphans, broken links: one full rescan per call
//! - `check_integrity`: a single extraction pass shared by every finding

pub mod backlinks;
pub mod graph;
pub mod integrity;

pub use backlinks::{get_backlinks, get_backlinks_with_context, preview_window};
pub use graph::{GraphStats, LinkGraph, build_link_graph};
pub use integrity::{
    BrokenLink, IntegrityReport, check_integrity, check_integrity_with_config,
    find_broken_links, find_orphaned_memos,
};

pub mod prelude {
    pub use crate::backlinks::{get_backlinks, get_backlinks_with_context};
    pub use crate::graph::{GraphStats, LinkGraph, build_link_graph};
    pub use crate::integrity::{
        BrokenLink, IntegrityReport, check_integrity, find_broken_links, find_orphaned_memos,
    };
    pub use memolog_core::prelude::*;
}
