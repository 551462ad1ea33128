use axum::{
    body::Bytes,
    extract::State,
    http::header,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::audio::wav_utils::{duration_ms, encode_wav, to_data_uri, WAV_MIME_TYPE};
use crate::config::constants::SAMPLE_RATE;
use crate::error::Result;
use crate::kitten::{voice_config::Voice, SpeechModel};
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{
    AudioDataResponse, GenerateRequest, HealthResponse, SynthesisRequest, VoicesResponse,
};
use crate::services::synthesis::synthesize_safe;

const INDEX_TEMPLATE: &str = include_str!("../static/index.html");

lazy_static! {
    static ref INDEX_PAGE: String = {
        let options: Vec<String> = Voice::all()
            .iter()
            .map(|voice| {
                let selected = if *voice == Voice::DEFAULT { " selected" } else { "" };
                format!(
                    "          <option value=\"{id}\"{selected}>{id}</option>",
                    id = voice.id(),
                    selected = selected
                )
            })
            .collect();
        INDEX_TEMPLATE.replace("{{VOICE_OPTIONS}}", &options.join("\n"))
    };
}

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn SpeechModel>,
    pub slow_request_threshold_ms: u64,
}

impl AppState {
    pub fn new(model: Arc<dyn SpeechModel>) -> Self {
        Self {
            model,
            slow_request_threshold_ms: 5000,
        }
    }
}

/// Synthesize a validated request off the async runtime and encode it as WAV
async fn render_wav(state: &AppState, req: &SynthesisRequest) -> Result<Vec<u8>> {
    let model = Arc::clone(&state.model);
    let text = req.text.clone();
    let voice = req.voice;
    let speed = req.speed;

    tracing::info!(
        voice = %voice,
        speed,
        text_chars = text.chars().count(),
        "Generating audio"
    );

    let start = Instant::now();
    let (wav, strategy, sample_count) = tokio::task::spawn_blocking(move || {
        let synthesis = synthesize_safe(model.as_ref(), &text, voice, speed)?;
        let wav = encode_wav(&synthesis.samples, SAMPLE_RATE)?;
        Ok::<_, crate::error::TtsError>((wav, synthesis.strategy, synthesis.samples.len()))
    })
    .await??;

    tracing::info!(
        ?strategy,
        audio_ms = duration_ms(sample_count, SAMPLE_RATE),
        elapsed_ms = start.elapsed().as_millis() as u64,
        wav_bytes = wav.len(),
        "Audio generated"
    );

    Ok(wav)
}

// HTTP Handlers

/// Landing page with the voice picker
async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE.as_str())
}

/// List available voices
async fn list_voices() -> Json<VoicesResponse> {
    let voices = Voice::all().iter().map(|v| v.id().to_string()).collect();
    Json(VoicesResponse { voices })
}

/// Generate audio and return it as a WAV attachment
async fn generate_audio(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let req = GenerateRequest::from_slice(&body)?.validate()?;
    let wav = render_wav(&state, &req).await?;

    let disposition = format!("attachment; filename=\"kitten_tts_{}.wav\"", req.voice);

    Ok((
        [
            (header::CONTENT_TYPE, WAV_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        wav,
    )
        .into_response())
}

/// Generate audio and return it inline as a base64 data URI
async fn generate_audio_stream(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AudioDataResponse>> {
    let req = GenerateRequest::from_slice(&body)?.validate()?;
    let wav = render_wav(&state, &req).await?;

    Ok(Json(AudioDataResponse {
        success: true,
        audio: to_data_uri(&wav),
        text: req.text,
        voice: req.voice.id().to_string(),
    }))
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let slow_threshold_ms = state.slow_request_threshold_ms;

    Router::new()
        .route("/", get(index))
        .route("/api/voices", get(list_voices))
        .route("/api/generate", post(generate_audio))
        .route("/api/generate-stream", post(generate_audio_stream))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn_with_state(
                    slow_threshold_ms,
                    access_log_middleware,
                ))
                .layer(cors),
        )
}
