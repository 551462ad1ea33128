use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::config::constants::{MAX_SPEED, MAX_TEXT_LENGTH, MIN_SPEED};

#[derive(Debug, Error)]
pub enum TtsError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Model errors
    #[error("Model load error: {0}")]
    ModelLoad(String),
    #[error("TTS engine error: {0}")]
    TtsEngine(String),

    // Audio encoding errors
    #[error("Audio encoding error: {0}")]
    AudioEncoding(String),

    // Request validation errors
    #[error("Invalid JSON payload")]
    InvalidPayload,
    #[error("Text is required")]
    EmptyText,
    #[error("Text is too long (max {} characters)", MAX_TEXT_LENGTH)]
    TextTooLong(usize),
    #[error("Invalid voice: {0}")]
    InvalidVoice(String),
    #[error("Speed must be a number")]
    SpeedNotNumeric,
    #[error("Speed must be between {:.1} and {:.1}", MIN_SPEED, MAX_SPEED)]
    InvalidSpeed(f32),

    // Synthesis fallback outcomes
    #[error("Text contains unsupported characters for this model.")]
    UnsupportedCharacters {
        #[source]
        source: Box<TtsError>,
    },
    #[error("Model could not synthesize this text. Try shorter text or English-only phrasing.")]
    SynthesisFailed {
        #[source]
        source: Box<TtsError>,
    },

    // Internal errors
    #[error("Task execution error: {0}")]
    TaskJoin(String),
}

impl TtsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TtsError::InvalidPayload
            | TtsError::EmptyText
            | TtsError::TextTooLong(_)
            | TtsError::InvalidVoice(_)
            | TtsError::SpeedNotNumeric
            | TtsError::InvalidSpeed(_) => StatusCode::BAD_REQUEST,
            TtsError::UnsupportedCharacters { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the message is meant for the client. Internal failures are
    /// replaced by a generic message in responses.
    pub fn is_user_facing(&self) -> bool {
        self.status_code() != StatusCode::INTERNAL_SERVER_ERROR
            || matches!(self, TtsError::SynthesisFailed { .. })
    }
}

impl From<hound::Error> for TtsError {
    fn from(err: hound::Error) -> Self {
        TtsError::AudioEncoding(err.to_string())
    }
}

impl From<tokio::task::JoinError> for TtsError {
    fn from(err: tokio::task::JoinError) -> Self {
        TtsError::TaskJoin(err.to_string())
    }
}

// Axum integration
impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_user_facing() {
            if let Some(source) = std::error::Error::source(&self) {
                tracing::warn!(error = %self, cause = %source, "Synthesis request failed");
            }
            self.to_string()
        } else {
            tracing::error!("Internal error: {}", self);
            "Internal server error".to_string()
        };

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": message
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, TtsError>;
