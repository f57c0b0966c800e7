//! Rewrite link syntax into clickable anchors for the rendering layer.
//!
//! The rewrite runs in two passes and the order matters: piped links first,
//! bare links second. In `[[a|see [[b]]` the display text swallows the inner
//! brackets; rewriting bare links first would break the piped link apart.
//!
//! The transform is not guaranteed to be idempotent: feeding its own output
//! back in is unsupported.
//!
//! Display text is emitted as-is; escaping is the rendering layer's concern.

use memolog_core::DEFAULT_LINK_CLASS;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `[[id|text]]`
static PIPED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([a-zA-Z0-9-]+)\|([^\]]+)\]\]").unwrap());

/// `[[id]]`
static BARE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([a-zA-Z0-9-]+)\]\]").unwrap());

fn anchor(id: &str, text: &str, class: &str) -> String {
    format!(
        r##"<a href="#" data-memo-id="{}" class="{}">{}</a>"##,
        id, class, text
    )
}

/// Replace every link in `content` with an anchor carrying `data-memo-id`.
///
/// # Example
/// ```
/// use memolog_parser::highlight_links;
///
/// let html = highlight_links("[[a|Text]] and [[b]]");
/// assert_eq!(
///     html,
///     r##"<a href="#" data-memo-id="a" class="memolog-link">Text</a> and <a href="#" data-memo-id="b" class="memolog-link">b</a>"##
/// );
/// ```
pub fn highlight_links(content: &str) -> String {
    highlight_links_with_class(content, DEFAULT_LINK_CLASS)
}

/// Same as [`highlight_links`] with a custom anchor class.
pub fn highlight_links_with_class(content: &str, class: &str) -> String {
    if !content.contains("[[") {
        return content.to_string();
    }

    let piped = PIPED_LINK.replace_all(content, |caps: &Captures| {
        anchor(&caps[1], &caps[2], class)
    });
    BARE_LINK
        .replace_all(&piped, |caps: &Captures| anchor(&caps[1], &caps[1], class))
        .into_owned()
}
