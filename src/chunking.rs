use crate::config::constants::SAFE_CHUNK_LEN;
use crate::text_processing::normalization::char_len;
use crate::text_processing::sentence_splitting::split_sentences;

/// Configuration for text chunking
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Maximum characters per chunk
    pub max_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: SAFE_CHUNK_LEN,
        }
    }
}

/// Splits text into chunks at sentence boundaries while respecting size limits
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Vec<String> {
    split_into_chunks(text, config.max_chunk_size)
}

/// Split `text` into ordered chunks of at most `max_len` characters
///
/// Sentences are packed greedily; a sentence longer than `max_len` is packed
/// word by word instead. A single word longer than `max_len` is emitted as
/// its own chunk and never split further. Never returns an empty vector.
pub fn split_into_chunks(text: &str, max_len: usize) -> Vec<String> {
    // If text is short enough, return as-is
    if char_len(text) <= max_len {
        return vec![text.to_string()];
    }

    let mut packer = ChunkPacker::new(max_len);

    for sentence in split_sentences(text) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }

        if char_len(sentence) > max_len {
            // Keep text order: whatever is pending goes out before the words
            packer.flush();
            for word in sentence.split_whitespace() {
                packer.push(word);
            }
            packer.flush();
            continue;
        }

        packer.push(sentence);
    }

    let chunks = packer.finish();
    if chunks.is_empty() {
        return vec![text.chars().take(max_len).collect()];
    }

    chunks
}

/// Greedy buffer that joins pieces with a single space until the limit
struct ChunkPacker {
    max_len: usize,
    current: String,
    current_len: usize,
    chunks: Vec<String>,
}

impl ChunkPacker {
    fn new(max_len: usize) -> Self {
        Self {
            max_len,
            current: String::new(),
            current_len: 0,
            chunks: Vec::new(),
        }
    }

    fn push(&mut self, piece: &str) {
        let piece_len = char_len(piece);

        if self.current.is_empty() {
            self.current.push_str(piece);
            self.current_len = piece_len;
            return;
        }

        if self.current_len + 1 + piece_len <= self.max_len {
            self.current.push(' ');
            self.current.push_str(piece);
            self.current_len += 1 + piece_len;
        } else {
            self.flush();
            self.current.push_str(piece);
            self.current_len = piece_len;
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.chunks.push(std::mem::take(&mut self.current));
            self.current_len = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text() {
        let config = ChunkingConfig::default();
        let text = "Hello world!";
        let chunks = chunk_text(text, &config);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_short_text_is_returned_unchanged() {
        // Not trimmed or normalized when under the limit
        let text = "  spaced  ";
        assert_eq!(split_into_chunks(text, 180), vec![text.to_string()]);
        assert_eq!(split_into_chunks("", 180), vec![String::new()]);
    }

    #[test]
    fn test_exact_limit_is_single_chunk() {
        let text = "a".repeat(180);
        assert_eq!(split_into_chunks(&text, 180), vec![text]);
    }

    #[test]
    fn test_sentence_packing() {
        let text = "This is sentence one. This is sentence two. This is sentence three.";
        let chunks = split_into_chunks(text, 50);
        assert_eq!(
            chunks,
            vec![
                "This is sentence one. This is sentence two.",
                "This is sentence three.",
            ]
        );
    }

    #[test]
    fn test_long_sentence_falls_back_to_words() {
        let text = "one two three four five six seven eight nine ten";
        let chunks = split_into_chunks(text, 20);
        assert_eq!(
            chunks,
            vec!["one two three four", "five six seven eight", "nine ten"]
        );
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 20);
        }
    }

    #[test]
    fn test_pending_sentences_flush_before_long_sentence() {
        let text = "Short one. this sentence is far too long to fit in one chunk. End.";
        let chunks = split_into_chunks(text, 25);
        assert_eq!(
            chunks,
            vec![
                "Short one.",
                "this sentence is far too",
                "long to fit in one chunk.",
                "End.",
            ]
        );
    }

    #[test]
    fn test_overlong_word_is_kept_whole() {
        let text = "A".repeat(200);
        let chunks = split_into_chunks(&text, 180);
        assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn test_overlong_word_between_words() {
        let long_word = "x".repeat(30);
        let text = format!("tiny {} tail", long_word);
        let chunks = split_into_chunks(&text, 20);
        assert_eq!(chunks, vec!["tiny".to_string(), long_word, "tail".to_string()]);
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 10 three-byte characters per word
        let word = "é".repeat(10);
        let text = format!("{} {} {}", word, word, word);
        let chunks = split_into_chunks(&text, 21);
        assert_eq!(chunks, vec![format!("{} {}", word, word), word]);
    }

    #[test]
    fn test_whitespace_only_falls_back_to_prefix() {
        let text = " ".repeat(30);
        let chunks = split_into_chunks(&text, 10);
        assert_eq!(chunks, vec![" ".repeat(10)]);
    }

    #[test]
    fn test_default_config_uses_safe_chunk_len() {
        assert_eq!(ChunkingConfig::default().max_chunk_size, 180);
    }
}
