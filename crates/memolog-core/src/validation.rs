//! Memo id validation.
//!
//! Validation is advisory: the link extractor and graph builder never consult
//! it. Callers that create or rename notes use it to keep ids linkable.

use regex::Regex;
use std::sync::LazyLock;

/// Strict memo id: ASCII alphanumerics and hyphens, at least one character.
static MEMO_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

/// Check whether `id` can be referenced with `[[id]]` syntax.
///
/// # Example
/// ```
/// use memolog_core::is_valid_memo_id;
///
/// assert!(is_valid_memo_id("2024-06-01-standup"));
/// assert!(!is_valid_memo_id("has space"));
/// assert!(!is_valid_memo_id(""));
/// ```
pub fn is_valid_memo_id(id: &str) -> bool {
    MEMO_ID.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_memo_id("abc"));
        assert!(is_valid_memo_id("ABC-123"));
        assert!(is_valid_memo_id("-"));
        assert!(is_valid_memo_id("m1a2b3"));
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_memo_id(""));
        assert!(!is_valid_memo_id("with space"));
        assert!(!is_valid_memo_id("under_score"));
        assert!(!is_valid_memo_id("folder/note"));
        assert!(!is_valid_memo_id("note|alias"));
        assert!(!is_valid_memo_id("caf\u{e9}"));
        assert!(!is_valid_memo_id("trailing\n"));
    }
}
