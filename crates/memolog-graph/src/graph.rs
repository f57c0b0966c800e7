//! Adjacency view of a memo corpus.
//!
//! The graph is derived, never stored: build it from the full note collection
//! whenever it is needed. Edges are kept raw (duplicates, self references and
//! ids missing from the corpus all survive); validity is the integrity
//! checker's job.

use memolog_core::Note;
use memolog_parser::extract_links;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Mapping from note id to the ordered target ids it references.
///
/// Iteration follows corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

/// Build the reference graph for a corpus.
///
/// Every note becomes a key, including notes without links. A repeated id
/// keeps its first position and the last note's edges.
///
/// # Example
/// ```
/// use memolog_core::Note;
/// use memolog_graph::build_link_graph;
///
/// let notes = vec![Note::new("a", "[[b]] [[c]] [[b]]"), Note::new("b", "none")];
/// let graph = build_link_graph(&notes);
/// assert_eq!(graph.outgoing("a").unwrap(), ["b", "c", "b"]);
/// assert!(graph.outgoing("b").unwrap().is_empty());
/// ```
pub fn build_link_graph(notes: &[Note]) -> LinkGraph {
    let mut graph = LinkGraph::default();
    for note in notes {
        let targets = extract_links(note)
            .into_iter()
            .map(|link| link.target_id)
            .collect();
        graph.insert(note.id.clone(), targets);
    }

    log::debug!(
        "Built link graph: {} notes, {} links",
        graph.len(),
        graph.edge_count()
    );
    graph
}

impl LinkGraph {
    fn insert(&mut self, id: String, targets: Vec<String>) {
        if let Some(&slot) = self.index.get(&id) {
            log::warn!("Duplicate memo id {} in corpus; keeping last edges", id);
            self.entries[slot].1 = targets;
        } else {
            self.index.insert(id.clone(), self.entries.len());
            self.entries.push((id, targets));
        }
    }

    /// Outgoing target ids of a note, `None` if the id is not a key
    pub fn outgoing(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Whether `id` is a note of the corpus (not merely a link target)
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Note ids in corpus order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// `(id, targets)` pairs in corpus order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, targets)| (id.as_str(), targets.as_slice()))
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|(_, targets)| targets.len()).sum()
    }

    /// Number of edges pointing at each referenced id.
    ///
    /// Keys include ids that are not notes of the corpus.
    pub fn incoming_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for (_, targets) in &self.entries {
            for target in targets {
                *counts.entry(target.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Summary statistics
    pub fn stats(&self) -> GraphStats {
        let total_notes = self.len();
        let total_links = self.edge_count();
        let incoming = self.incoming_counts();

        let orphaned_notes = self
            .iter()
            .filter(|(id, targets)| targets.is_empty() && !incoming.contains_key(id))
            .count();

        let average_links_per_note = if total_notes > 0 {
            total_links as f64 / total_notes as f64
        } else {
            0.0
        };

        GraphStats {
            total_notes,
            total_links,
            orphaned_notes,
            average_links_per_note,
        }
    }

    /// Project into a petgraph graph for visualization.
    ///
    /// Node weights are ids. Unresolved targets become nodes as well, appended
    /// after the corpus notes in order of first reference. Duplicate links
    /// become parallel edges.
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let mut nodes: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.len());

        for id in self.ids() {
            nodes.insert(id, graph.add_node(id.to_string()));
        }

        for (id, targets) in self.iter() {
            let source = nodes[id];
            for target in targets {
                let target_idx = *nodes
                    .entry(target.as_str())
                    .or_insert_with(|| graph.add_node(target.clone()));
                graph.add_edge(source, target_idx, ());
            }
        }

        graph
    }
}

impl Serialize for LinkGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, targets) in &self.entries {
            map.serialize_entry(id, targets)?;
        }
        map.end()
    }
}

/// Statistics about the graph
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GraphStats {
    pub total_notes: usize,
    pub total_links: usize,
    pub orphaned_notes: usize,
    pub average_links_per_note: f64,
}
