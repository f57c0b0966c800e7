//! Backlink resolution with contextual previews.
//!
//! Offsets in this module count characters, not bytes, so a preview window
//! never splits a multi-byte character.

use memolog_core::{Backlink, DEFAULT_CONTEXT_LENGTH, Note};
use memolog_parser::extract_links;

/// Marker for a truncated side of a preview
pub const ELLIPSIS: &str = "...";

/// Every reference to `target_id` in the corpus, with a 50-character preview
/// window on each side.
///
/// One backlink per link occurrence, in corpus order and then text order.
///
/// # Example
/// ```
/// use memolog_core::Note;
/// use memolog_graph::get_backlinks;
///
/// let notes = vec![Note::new("y", "prefix [[x|target]] suffix")];
/// let backlinks = get_backlinks("x", &notes);
/// assert_eq!(backlinks.len(), 1);
/// assert_eq!(backlinks[0].memo_id, "y");
/// assert_eq!(backlinks[0].preview, "prefix [[x|target]] suffix");
/// ```
pub fn get_backlinks(target_id: &str, notes: &[Note]) -> Vec<Backlink> {
    get_backlinks_with_context(target_id, notes, DEFAULT_CONTEXT_LENGTH)
}

/// [`get_backlinks`] with an explicit window size.
pub fn get_backlinks_with_context(
    target_id: &str,
    notes: &[Note],
    context_length: usize,
) -> Vec<Backlink> {
    let mut backlinks = Vec::new();

    for note in notes {
        for link in extract_links(note) {
            if link.target_id != target_id {
                continue;
            }
            let preview = preview_for(&note.content, &link.text, context_length);
            backlinks.push(Backlink {
                memo_id: note.id.clone(),
                preview,
                text: link.text,
            });
        }
    }

    log::debug!(
        "Resolved {} backlinks to {} across {} notes",
        backlinks.len(),
        target_id,
        notes.len()
    );
    backlinks
}

/// Preview around the first occurrence of `text`, or the head of the content
/// when `text` does not occur.
pub(crate) fn preview_for(content: &str, text: &str, context_length: usize) -> String {
    match content.find(text) {
        Some(byte_idx) => {
            let match_index = content[..byte_idx].chars().count();
            preview_window(content, match_index, text.chars().count(), context_length)
        }
        None => {
            let head: String = content.chars().take(context_length).collect();
            head + ELLIPSIS
        }
    }
}

/// Cut `context_length` characters on each side of a match.
///
/// The window is clamped to the content; each side that had to be cut gets
/// an [`ELLIPSIS`]. `match_index` and `match_len` are character counts.
///
/// # Example
/// ```
/// use memolog_graph::backlinks::preview_window;
///
/// assert_eq!(preview_window("abcdefghij", 4, 2, 2), "...cdefgh...");
/// assert_eq!(preview_window("abcdefghij", 0, 2, 2), "abcd...");
/// assert_eq!(preview_window("abcdefghij", 8, 2, 2), "...ghij");
/// ```
pub fn preview_window(
    content: &str,
    match_index: usize,
    match_len: usize,
    context_length: usize,
) -> String {
    let total = content.chars().count();
    let start = match_index.saturating_sub(context_length).min(total);
    let end = match_index
        .saturating_add(match_len)
        .saturating_add(context_length)
        .min(total);

    let window: String = content.chars().skip(start).take(end - start).collect();

    let mut preview = String::with_capacity(window.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        preview.push_str(ELLIPSIS);
    }
    preview.push_str(&window);
    if end < total {
        preview.push_str(ELLIPSIS);
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_note_untruncated() {
        let notes = vec![Note::new("y", "prefix [[x|target]] suffix")];
        let backlinks = get_backlinks("x", &notes);
        assert_eq!(backlinks.len(), 1);
        assert_eq!(backlinks[0].memo_id, "y");
        assert_eq!(backlinks[0].text, "target");
        assert!(backlinks[0].preview.contains("target"));
        assert!(!backlinks[0].preview.contains(ELLIPSIS));
    }

    #[test]
    fn test_long_note_truncated_both_sides() {
        let content = format!("{}[[x|mid]]{}", "a".repeat(80), "b".repeat(80));
        let notes = vec![Note::new("y", content)];
        let preview = &get_backlinks("x", &notes)[0].preview;

        assert!(preview.starts_with("...") && preview.ends_with("..."));
        assert!(preview.contains("mid"));
        // 50 before + "mid" + 50 after + two markers
        assert_eq!(preview.chars().count(), 50 + 3 + 50 + 6);
        assert_eq!(&preview[3..53], "a".repeat(46) + "[[x|");
    }

    #[test]
    fn test_one_backlink_per_occurrence() {
        let notes = vec![
            Note::new("p", "[[x]] and again [[x|X]]"),
            Note::new("q", "unrelated [[z]]"),
            Note::new("r", "[[x]]"),
        ];
        let backlinks = get_backlinks("x", &notes);
        let ids: Vec<_> = backlinks.iter().map(|b| b.memo_id.as_str()).collect();
        assert_eq!(ids, ["p", "p", "r"]);
        assert_eq!(backlinks[1].text, "X");
    }

    #[test]
    fn test_preview_uses_first_occurrence_of_display_text() {
        // "x" first occurs inside "index", not in the link itself
        let notes = vec![Note::new("y", "index [[x]]")];
        let backlinks = get_backlinks_with_context("x", &notes, 1);
        assert_eq!(backlinks[0].preview, "...ex ...");
    }

    #[test]
    fn test_no_backlinks() {
        assert!(get_backlinks("x", &[]).is_empty());
        assert!(get_backlinks("x", &[Note::new("a", "[[xy]] [[X]]")]).is_empty());
    }

    #[test]
    fn test_preview_for_missing_text_falls_back_to_head() {
        assert_eq!(preview_for("short", "absent", 50), "short...");
        assert_eq!(preview_for("abcdefgh", "absent", 3), "abc...");
    }

    #[test]
    fn test_preview_window_clamps() {
        assert_eq!(preview_window("abc", 0, 3, 50), "abc");
        assert_eq!(preview_window("", 0, 0, 5), "");
        assert_eq!(preview_window("abc", 10, 2, 1), "...");
        assert_eq!(preview_window("abcdef", 2, 1, 0), "...c...");
    }

    #[test]
    fn test_preview_window_multibyte() {
        let content = "\u{e9}\u{e9}\u{e9}[[x]]\u{1f4dd}\u{1f4dd}\u{1f4dd}";
        assert_eq!(
            preview_window(content, 3, 5, 1),
            "...\u{e9}[[x]]\u{1f4dd}..."
        );
    }
}
