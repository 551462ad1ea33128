//! Lossy ASCII sanitization for text the model rejected
//!
//! Applies compatibility decomposition so accented letters keep their base
//! letter ("é" becomes "e"), then keeps only the characters the model handles.
use unicode_normalization::UnicodeNormalization;

use super::normalization::normalize;

/// Punctuation kept alongside ASCII letters, digits and the space
const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-'];

/// Whether `ch` may appear in sanitized text
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == ' ' || ALLOWED_PUNCTUATION.contains(&ch)
}

/// Reduce `text` to the ASCII subset accepted by the model
///
/// Characters outside the allowed set become spaces, so "foo@bar" turns into
/// "foo bar" rather than "foobar". The result has single spaces and no
/// leading or trailing whitespace. It is empty when nothing usable remains,
/// which callers must treat as unsupported input.
pub fn sanitize(text: &str) -> String {
    let ascii: String = text
        .nfkd()
        .filter(char::is_ascii)
        .map(|ch| if is_allowed_char(ch) { ch } else { ' ' })
        .collect();

    normalize(&ascii)
}
