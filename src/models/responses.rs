use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Inline-playback variant of a generated clip
#[derive(Debug, Serialize)]
pub struct AudioDataResponse {
    pub success: bool,
    /// `data:audio/wav;base64,...` URI
    pub audio: String,
    /// Text after whitespace normalization
    pub text: String,
    pub voice: String,
}
