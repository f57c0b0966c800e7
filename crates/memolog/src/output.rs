//! Output formatting for CLI results.

use memolog_core::{Backlink, Link, Note};
use memolog_graph::{IntegrityReport, LinkGraph};
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

/// Output format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Human-readable listing
    Human,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "Unknown output format '{}'. Valid options: json, human",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Human => write!(f, "human"),
        }
    }
}

/// Pretty JSON for any serializable result
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// One line per note: `id -> a, b, c`
pub fn render_graph(graph: &LinkGraph) -> String {
    let mut out = String::new();
    for (id, targets) in graph.iter() {
        if targets.is_empty() {
            let _ = writeln!(out, "{} (no links)", id);
        } else {
            let _ = writeln!(out, "{} -> {}", id, targets.join(", "));
        }
    }
    let stats = graph.stats();
    let _ = write!(
        out,
        "{} notes, {} links, {:.2} links/note",
        stats.total_notes, stats.total_links, stats.average_links_per_note
    );
    out
}

pub fn render_backlinks(target_id: &str, backlinks: &[Backlink]) -> String {
    if backlinks.is_empty() {
        return format!("No backlinks to {}", target_id);
    }
    let mut out = format!("{} backlinks to {}:", backlinks.len(), target_id);
    for backlink in backlinks {
        let _ = write!(
            out,
            "\n  {} [{}]: {}",
            backlink.memo_id,
            backlink.text,
            backlink.preview.replace('\n', " ")
        );
    }
    out
}

pub fn render_orphans(orphans: &[&Note]) -> String {
    if orphans.is_empty() {
        return "No orphaned notes".to_string();
    }
    let mut out = format!("{} orphaned notes:", orphans.len());
    for note in orphans {
        let _ = write!(out, "\n  {}", note.id);
    }
    out
}

pub fn render_broken_links(links: &[Link]) -> String {
    if links.is_empty() {
        return "No broken links".to_string();
    }
    let mut out = format!("{} broken links:", links.len());
    for link in links {
        let _ = write!(out, "\n  {} -> {}", link.source_id, link.target_id);
        if link.has_alias() {
            let _ = write!(out, " (\"{}\")", link.text);
        }
    }
    out
}

pub fn render_report(report: &IntegrityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Health score: {}/100 ({})",
        report.health_score,
        if report.is_healthy() { "healthy" } else { "needs attention" }
    );
    let _ = writeln!(
        out,
        "{} notes, {} links",
        report.total_notes, report.total_links
    );

    let _ = write!(out, "Broken links: {}", report.broken_links.len());
    for broken in &report.broken_links {
        let _ = write!(out, "\n  {} -> {}", broken.source_id, broken.target_id);
        if !broken.suggestions.is_empty() {
            let _ = write!(out, " (did you mean: {}?)", broken.suggestions.join(", "));
        }
    }

    let _ = write!(out, "\nOrphaned notes: {}", report.orphaned_notes.len());
    for id in &report.orphaned_notes {
        let _ = write!(out, "\n  {}", id);
    }

    let _ = write!(out, "\nDead ends: {}", report.dead_end_notes.len());
    for id in &report.dead_end_notes {
        let _ = write!(out, "\n  {}", id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use memolog_graph::{build_link_graph, check_integrity};

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("HUMAN".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Human.to_string(), "human");
    }

    #[test]
    fn test_render_graph() {
        let notes = vec![Note::new("a", "[[b]] [[c]]"), Note::new("b", "")];
        let out = render_graph(&build_link_graph(&notes));
        assert_eq!(out, "a -> b, c\nb (no links)\n2 notes, 2 links, 1.00 links/note");
    }

    #[test]
    fn test_render_empty_results() {
        assert_eq!(render_backlinks("x", &[]), "No backlinks to x");
        assert_eq!(render_orphans(&[]), "No orphaned notes");
        assert_eq!(render_broken_links(&[]), "No broken links");
    }

    #[test]
    fn test_render_broken_links_shows_alias() {
        let out = render_broken_links(&[
            Link::new("a", "gone", "gone"),
            Link::new("a", "lost", "Lost note"),
        ]);
        assert_eq!(out, "2 broken links:\n  a -> gone\n  a -> lost (\"Lost note\")");
    }

    #[test]
    fn test_render_report() {
        let notes = vec![
            Note::new("alpha", "[[alpah]]"),
            Note::new("solo", "nothing"),
        ];
        let out = render_report(&check_integrity(&notes));
        assert!(out.starts_with("Health score: "));
        assert!(out.contains("alpha -> alpah (did you mean: alpha?)"));
        assert!(out.contains("Orphaned notes: 1\n  solo"));
    }
}
