//! Loading note corpora from JSON.
//!
//! A corpus is a JSON array of `{"id": ..., "content": ...}` records. Order is
//! preserved because every analysis reports results in corpus order.

use crate::error::{Error, Result};
use crate::models::Note;
use std::collections::HashSet;
use std::path::Path;

/// Parse a corpus from a JSON string, rejecting duplicate ids.
pub fn parse_notes(json: &str) -> Result<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_str(json)?;
    ensure_unique_ids(&notes)?;
    log::debug!("Parsed corpus with {} notes", notes.len());
    Ok(notes)
}

/// Read and parse a corpus file.
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let raw = std::fs::read_to_string(path)?;
    let notes = parse_notes(&raw)?;
    log::info!("Loaded {} notes from {}", notes.len(), path.display());
    Ok(notes)
}

/// Fail on the first id seen twice.
pub fn ensure_unique_ids(notes: &[Note]) -> Result<()> {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        if !seen.insert(note.id.as_str()) {
            return Err(Error::duplicate_memo_id(&note.id));
        }
    }
    Ok(())
}
