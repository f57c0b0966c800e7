//! Corpus integrity: orphaned notes and broken links.
//!
//! Findings are data, never errors. An empty corpus yields empty findings.

use crate::graph::build_link_graph;
use memolog_core::{AnalysisConfig, Link, Note};
use memolog_parser::extract_links;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Notes with no outgoing links that no note links to.
///
/// A note with only outgoing or only incoming links is not orphaned.
///
/// # Example
/// ```
/// use memolog_core::Note;
/// use memolog_graph::find_orphaned_memos;
///
/// let notes = vec![Note::new("a", "no links"), Note::new("b", "[[a]]")];
/// assert!(find_orphaned_memos(&notes).is_empty());
/// ```
pub fn find_orphaned_memos(notes: &[Note]) -> Vec<&Note> {
    let graph = build_link_graph(notes);
    let incoming = graph.incoming_counts();

    let orphans: Vec<&Note> = notes
        .iter()
        .filter(|note| {
            graph.outgoing(&note.id).is_none_or(|targets| targets.is_empty())
                && !incoming.contains_key(note.id.as_str())
        })
        .collect();

    log::debug!("Found {} orphaned notes", orphans.len());
    orphans
}

/// Links whose target id is not the id of any note in the corpus.
///
/// # Example
/// ```
/// use memolog_core::Note;
/// use memolog_graph::find_broken_links;
///
/// let broken = find_broken_links(&[Note::new("a", "[[missing]]")]);
/// assert_eq!(broken.len(), 1);
/// assert_eq!(broken[0].target_id, "missing");
/// ```
pub fn find_broken_links(notes: &[Note]) -> Vec<Link> {
    let known: HashSet<&str> = notes.iter().map(|note| note.id.as_str()).collect();

    let broken: Vec<Link> = notes
        .iter()
        .flat_map(extract_links)
        .filter(|link| !known.contains(link.target_id.as_str()))
        .collect();

    log::debug!("Found {} broken links", broken.len());
    broken
}

/// A broken link with ids that look like what was meant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenLink {
    pub source_id: String,
    pub target_id: String,
    pub text: String,
    /// Known ids ranked by similarity to `target_id`
    pub suggestions: Vec<String>,
}

/// Integrity report for a corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    /// Total number of notes
    pub total_notes: usize,
    /// Total number of links, broken ones included
    pub total_links: usize,
    /// Ids of notes with neither outgoing nor incoming links
    pub orphaned_notes: Vec<String>,
    /// Links to unknown ids
    pub broken_links: Vec<BrokenLink>,
    /// Ids of notes with incoming but no outgoing links
    pub dead_end_notes: Vec<String>,
    /// Overall health score (0-100)
    pub health_score: u8,
}

impl IntegrityReport {
    /// Calculate health score based on issues
    fn calculate_score(&mut self) {
        if self.total_notes == 0 {
            self.health_score = 0;
            return;
        }

        let mut score = 100;

        // Penalize broken links (up to -30 points)
        let broken_ratio = self.broken_links.len() as f32 / self.total_links.max(1) as f32;
        score -= (broken_ratio * 30.0) as u8;

        // Penalize orphaned notes (up to -20 points)
        let orphaned_ratio = self.orphaned_notes.len() as f32 / self.total_notes as f32;
        score -= (orphaned_ratio * 20.0) as u8;

        // Penalize dead ends (up to -10 points)
        let dead_end_ratio = self.dead_end_notes.len() as f32 / self.total_notes as f32;
        score -= (dead_end_ratio * 10.0) as u8;

        self.health_score = score;
    }

    /// Check if corpus is healthy (score >= 80)
    pub fn is_healthy(&self) -> bool {
        self.health_score >= 80
    }

    /// No broken links and no orphans
    pub fn is_clean(&self) -> bool {
        self.broken_links.is_empty() && self.orphaned_notes.is_empty()
    }
}

/// Full integrity check with default settings.
pub fn check_integrity(notes: &[Note]) -> IntegrityReport {
    check_integrity_with_config(notes, &AnalysisConfig::default())
}

/// Full integrity check.
///
/// Extracts each note's links once and derives every finding from that pass.
/// Orphans and broken links match [`find_orphaned_memos`] and
/// [`find_broken_links`] exactly.
pub fn check_integrity_with_config(notes: &[Note], config: &AnalysisConfig) -> IntegrityReport {
    let extracted: Vec<(&Note, Vec<Link>)> =
        notes.iter().map(|note| (note, extract_links(note))).collect();

    let known: HashSet<&str> = notes.iter().map(|note| note.id.as_str()).collect();

    // Last occurrence wins for repeated ids, as in the graph builder
    let mut outgoing: HashMap<&str, usize> = HashMap::with_capacity(notes.len());
    let mut incoming: HashSet<&str> = HashSet::new();
    for (note, links) in &extracted {
        outgoing.insert(note.id.as_str(), links.len());
        incoming.extend(links.iter().map(|link| link.target_id.as_str()));
    }

    let mut report = IntegrityReport {
        total_notes: notes.len(),
        total_links: extracted.iter().map(|(_, links)| links.len()).sum(),
        orphaned_notes: Vec::new(),
        broken_links: Vec::new(),
        dead_end_notes: Vec::new(),
        health_score: 100,
    };

    for (note, links) in &extracted {
        let id = note.id.as_str();
        let has_outgoing = outgoing.get(id).is_some_and(|&count| count > 0);
        let has_incoming = incoming.contains(id);

        match (has_outgoing, has_incoming) {
            (false, false) => report.orphaned_notes.push(id.to_string()),
            (false, true) => report.dead_end_notes.push(id.to_string()),
            _ => {}
        }

        for link in links {
            if known.contains(link.target_id.as_str()) {
                continue;
            }
            log::trace!("Broken link {} -> {}", link.source_id, link.target_id);
            report.broken_links.push(BrokenLink {
                suggestions: suggest_targets(&link.target_id, &known, config),
                source_id: link.source_id.clone(),
                target_id: link.target_id.clone(),
                text: link.text.clone(),
            });
        }
    }

    report.calculate_score();

    log::debug!(
        "Integrity check: {} notes, {} links, {} broken, {} orphaned, score {}",
        report.total_notes,
        report.total_links,
        report.broken_links.len(),
        report.orphaned_notes.len(),
        report.health_score
    );
    report
}

/// Known ids similar to a broken target, best first
fn suggest_targets(target: &str, known: &HashSet<&str>, config: &AnalysisConfig) -> Vec<String> {
    let target_lower = target.to_lowercase();

    let mut scored: Vec<(f64, &str)> = known
        .iter()
        .map(|&id| (strsim::jaro_winkler(&target_lower, &id.to_lowercase()), id))
        .filter(|&(score, _)| score >= config.suggestion_threshold)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(config.max_suggestions)
        .map(|(_, id)| id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Note> {
        vec![
            Note::new("hub", "[[alpha]] [[beta]] [[gamma]]"),
            Note::new("alpha", "[[hub]]"),
            Note::new("beta", "no links"),
            Note::new("gamma", "see [[alpah]] and [[nowhere|far]]"),
            Note::new("island", "alone"),
            Note::new("self", "[[self]]"),
        ]
    }

    #[test]
    fn test_orphan_requires_no_links_either_way() {
        let notes = vec![Note::new("a", "no links"), Note::new("b", "[[a]]")];
        assert!(find_orphaned_memos(&notes).is_empty());

        let notes = corpus();
        let orphans: Vec<_> = find_orphaned_memos(&notes)
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(orphans, ["island"]);
    }

    #[test]
    fn test_link_to_missing_note_still_counts_as_outgoing() {
        let notes = vec![Note::new("a", "[[missing]]")];
        assert!(find_orphaned_memos(&notes).is_empty());
    }

    #[test]
    fn test_broken_links_in_corpus_order() {
        let broken = find_broken_links(&corpus());
        let targets: Vec<_> = broken.iter().map(|l| l.target_id.as_str()).collect();
        assert_eq!(targets, ["alpah", "nowhere"]);
        assert_eq!(broken[1], Link::new("gamma", "nowhere", "far"));
    }

    #[test]
    fn test_empty_corpus() {
        assert!(find_orphaned_memos(&[]).is_empty());
        assert!(find_broken_links(&[]).is_empty());

        let report = check_integrity(&[]);
        assert_eq!(report.total_notes, 0);
        assert_eq!(report.health_score, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_matches_individual_checks() {
        let notes = corpus();
        let report = check_integrity(&notes);

        let orphans: Vec<String> = find_orphaned_memos(&notes)
            .into_iter()
            .map(|n| n.id.clone())
            .collect();
        assert_eq!(report.orphaned_notes, orphans);

        let broken: Vec<Link> = report
            .broken_links
            .iter()
            .map(|b| Link::new(&b.source_id, &b.target_id, &b.text))
            .collect();
        assert_eq!(broken, find_broken_links(&notes));
    }

    #[test]
    fn test_report_details() {
        let report = check_integrity(&corpus());
        assert_eq!(report.total_notes, 6);
        assert_eq!(report.total_links, 7);
        assert_eq!(report.dead_end_notes, ["beta"]);
        assert!(!report.is_clean());
        assert!(report.health_score < 100);
        assert!(report.health_score >= 40);
    }

    #[test]
    fn test_suggestions() {
        let report = check_integrity(&corpus());
        assert_eq!(
            report.broken_links[0].suggestions.first().map(String::as_str),
            Some("alpha")
        );
        assert!(report.broken_links[1].suggestions.is_empty());

        let strict = AnalysisConfig::new().with_suggestions(0.8, 0);
        let report = check_integrity_with_config(&corpus(), &strict);
        assert!(report.broken_links[0].suggestions.is_empty());
    }

    #[test]
    fn test_clean_corpus_is_healthy() {
        let notes = vec![Note::new("a", "[[b]]"), Note::new("b", "[[a]]")];
        let report = check_integrity(&notes);
        assert!(report.is_clean());
        assert!(report.dead_end_notes.is_empty());
        assert_eq!(report.health_score, 100);
        assert!(report.is_healthy());
    }
}
