//! Whitespace normalization applied to every incoming text

/// Collapse every whitespace run to a single space and trim both ends
///
/// Unicode whitespace (tabs, newlines, non-breaking spaces, ...) counts as
/// whitespace. Never fails; an all-whitespace input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of characters (Unicode scalar values) in `text`
///
/// All length limits in this crate are expressed in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
