//! Link extraction: `[[id]]` and `[[id|display text]]`.
//!
//! Both forms are recognized by a single combined pattern so matches come back
//! in text order and never overlap. Anything that fails the pattern (unbalanced
//! brackets, characters outside `[a-zA-Z0-9-]` in the id, empty display text)
//! is plain text, not an error.

use memolog_core::{Link, Note};
use regex::Regex;
use std::sync::LazyLock;

/// Bare or piped link; group 1 is the target id, group 2 the optional display text
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([a-zA-Z0-9-]+)(?:\|([^\]]+))?\]\]").unwrap());

#[inline]
fn has_link(content: &str) -> bool {
    content.contains("[[")
}

/// Extract every link in a note, in the order they appear.
///
/// # Example
/// ```
/// use memolog_core::Note;
/// use memolog_parser::extract_links;
///
/// let note = Note::new("n1", "see [[abc-1]] and [[abc-2|Other]]");
/// let links = extract_links(&note);
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[0].text, "abc-1");
/// assert_eq!(links[1].text, "Other");
/// ```
pub fn extract_links(note: &Note) -> Vec<Link> {
    extract_links_from_str(&note.id, &note.content)
}

/// Extract links from raw content attributed to `source_id`.
pub fn extract_links_from_str(source_id: &str, content: &str) -> Vec<Link> {
    if !has_link(content) {
        return Vec::new();
    }

    let links: Vec<Link> = LINK
        .captures_iter(content)
        .map(|caps| {
            let target = &caps[1];
            let text = caps.get(2).map_or(target, |m| m.as_str());
            Link::new(source_id, target, text)
        })
        .collect();

    log::trace!("Extracted {} links from {}", links.len(), source_id);
    links
}

/// Serialize a reference back into link syntax.
///
/// The inverse of extraction: `[[id]]` without display text, `[[id|text]]`
/// with it. Neither argument is validated; pass ids through
/// [`is_valid_memo_id`](memolog_core::is_valid_memo_id) first when they come
/// from user input.
///
/// # Example
/// ```
/// use memolog_parser::create_link;
///
/// assert_eq!(create_link("abc", None), "[[abc]]");
/// assert_eq!(create_link("abc", Some("See ABC")), "[[abc|See ABC]]");
/// ```
pub fn create_link(target_id: &str, display_text: Option<&str>) -> String {
    match display_text {
        Some(text) => format!("[[{}|{}]]", target_id, text),
        None => format!("[[{}]]", target_id),
    }
}
