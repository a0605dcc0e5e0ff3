/// Extractors that turn fetched list documents into URL lists
use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)]+").expect("markdown URL pattern"));

static BOOKMARK_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<A HREF="(https?://[^\s"]+)""#).expect("bookmark pattern"));

/// Parse a plaintext filter list: one entry per line
///
/// A line is kept when it has non-whitespace content and does not start
/// with "#". Kept lines are returned verbatim, untrimmed.
pub fn parse_line_list(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Extract every http(s) URL from a markdown document, in document order
///
/// A match runs until the first whitespace or ")" so that markdown links
/// like `[name](https://site.com)` yield the bare URL.
pub fn extract_markdown_urls(markdown: &str) -> Vec<String> {
    MARKDOWN_URL
        .find_iter(markdown)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract the targets of `<A HREF="...">` anchors from a bookmarks export
///
/// The match is case-sensitive, as written by browser bookmark exporters.
pub fn extract_bookmark_urls(html: &str) -> Vec<String> {
    BOOKMARK_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
