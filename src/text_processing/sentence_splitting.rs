//! Sentence boundary detection for chunking
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sentence-ending punctuation followed by whitespace
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();
}

/// Split text after `.`, `!` or `?` when followed by whitespace
///
/// Punctuation stays with its sentence and the separating whitespace is
/// dropped. Pieces are not trimmed and may be empty only when the input is.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Punctuation is a single ASCII byte
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
}
