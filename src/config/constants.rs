/// Maximum allowed text length for synthesis requests (in characters)
///
/// Requests exceeding this limit are rejected before the model is touched.
pub const MAX_TEXT_LENGTH: usize = 1000;

/// Maximum characters per chunk handed to the model during chunked fallback
pub const SAFE_CHUNK_LEN: usize = 180;

/// Sample rate of the audio produced by the model (Hz, mono)
pub const SAMPLE_RATE: u32 = 24_000;

/// Accepted speed multiplier range (inclusive)
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Hugging Face repository loaded when nothing else is configured
pub const DEFAULT_MODEL_REPO: &str = "KittenML/kitten-tts-nano-0.8-fp32";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
