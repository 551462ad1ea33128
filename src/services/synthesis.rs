use crate::chunking::split_into_chunks;
use crate::config::constants::SAFE_CHUNK_LEN;
use crate::error::{Result, TtsError};
use crate::kitten::voice_config::Voice;
use crate::kitten::SpeechModel;
use crate::text_processing::normalization::char_len;
use crate::text_processing::sanitization::sanitize;

/// Which fallback stage produced the audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The text was accepted as-is
    Direct,
    /// The ASCII-sanitized text was accepted
    Sanitized,
    /// The sanitized text was synthesized chunk by chunk
    Chunked { total: usize, dropped: usize },
}

/// Audio produced by [`synthesize_safe`]
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub samples: Vec<f32>,
    pub strategy: Strategy,
}

/// Synthesize `text`, degrading gracefully when the model rejects it
///
/// Stages, stopping at the first success:
/// 1. the text as given;
/// 2. the ASCII-sanitized text, if it differs;
/// 3. the sanitized text split into chunks of at most
///    [`SAFE_CHUNK_LEN`] characters, skipping chunks the model rejects.
///
/// Only [`TtsError::TtsEngine`] moves to the next stage; any other error is
/// returned immediately. When sanitizing leaves nothing, or every chunk
/// fails, the error carries the first model failure as its source.
pub fn synthesize_safe<M>(model: &M, text: &str, voice: Voice, speed: f32) -> Result<Synthesis>
where
    M: SpeechModel + ?Sized,
{
    let first_error = match model.generate(text, voice, speed) {
        Ok(samples) => {
            return Ok(Synthesis {
                samples,
                strategy: Strategy::Direct,
            })
        }
        Err(e @ TtsError::TtsEngine(_)) => e,
        Err(e) => return Err(e),
    };

    tracing::debug!(error = %first_error, "Direct synthesis failed, sanitizing text");

    let sanitized = sanitize(text);
    if sanitized.is_empty() {
        return Err(TtsError::UnsupportedCharacters {
            source: Box::new(first_error),
        });
    }

    if sanitized != text {
        match model.generate(&sanitized, voice, speed) {
            Ok(samples) => {
                return Ok(Synthesis {
                    samples,
                    strategy: Strategy::Sanitized,
                })
            }
            Err(TtsError::TtsEngine(msg)) => {
                tracing::debug!(error = %msg, "Sanitized synthesis failed, chunking text");
            }
            Err(e) => return Err(e),
        }
    }

    let chunks = split_into_chunks(&sanitized, SAFE_CHUNK_LEN);
    let total = chunks.len();
    let mut pieces = Vec::with_capacity(total);

    for (chunk_index, chunk) in chunks.iter().enumerate() {
        match model.generate(chunk, voice, speed) {
            Ok(samples) if !samples.is_empty() => pieces.push(samples),
            Ok(_) => {
                tracing::warn!(
                    chunk_index,
                    chunk_chars = char_len(chunk),
                    "Dropping chunk: model returned no audio"
                );
            }
            Err(TtsError::TtsEngine(msg)) => {
                tracing::warn!(
                    chunk_index,
                    chunk_chars = char_len(chunk),
                    error = %msg,
                    "Dropping chunk: synthesis failed"
                );
            }
            Err(e) => return Err(e),
        }
    }

    if pieces.is_empty() {
        return Err(TtsError::SynthesisFailed {
            source: Box::new(first_error),
        });
    }

    let dropped = total - pieces.len();
    tracing::debug!(total, dropped, "Chunked synthesis complete");

    Ok(Synthesis {
        samples: pieces.concat(),
        strategy: Strategy::Chunked { total, dropped },
    })
}
