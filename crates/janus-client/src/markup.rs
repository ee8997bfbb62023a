/// Inline emphasis tags the vendor APIs wrap search-keyword matches in.
const HIGHLIGHT_TAGS: [&str; 2] = ["<highlighttext>", "</highlighttext>"];

/// Remove every literal highlight tag from `text`.
///
/// Only these exact substrings are touched; any other markup in the snippet
/// is left as-is. Idempotent.
pub fn strip_highlight(text: &str) -> String {
    let mut cleaned = text.to_string();
    for tag in HIGHLIGHT_TAGS {
        cleaned = cleaned.replace(tag, "");
    }
    cleaned
}
