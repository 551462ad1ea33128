pub mod model_paths;
pub mod voice_config;

use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, TtsError};
use voice_config::Voice;

/// A loaded text-to-speech model
///
/// `generate` returns mono samples at [`SAMPLE_RATE`](crate::config::constants::SAMPLE_RATE).
/// Failures the model reports about its input must surface as
/// [`TtsError::TtsEngine`]; the synthesis fallback only retries on that kind.
pub trait SpeechModel: Send + Sync {
    fn generate(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<f32>>;
}

impl<F> SpeechModel for F
where
    F: Fn(&str, Voice, f32) -> Result<Vec<f32>> + Send + Sync,
{
    fn generate(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<f32>> {
        self(text, voice, speed)
    }
}

/// KittenTTS ONNX model loaded from the Hugging Face hub
#[cfg(feature = "kitten")]
pub struct KittenModel {
    engine: kittentts::KittenTTS,
}

#[cfg(feature = "kitten")]
impl KittenModel {
    pub fn from_hub(repo_id: &str) -> Result<Self> {
        let engine = kittentts::download::load_from_hub(repo_id)
            .map_err(|e| TtsError::ModelLoad(format!("{:#}", e)))?;
        Ok(Self { engine })
    }

    /// Voice names reported by the loaded model
    pub fn available_voices(&self) -> &[String] {
        &self.engine.available_voices
    }
}

#[cfg(feature = "kitten")]
impl SpeechModel for KittenModel {
    fn generate(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<f32>> {
        self.engine
            .generate(text, voice.id(), speed, true)
            .map_err(|e| TtsError::TtsEngine(format!("{:#}", e)))
    }
}

/// Load the configured model and hand it out as a shareable handle
pub fn load_model(repo_id: &str, cache_dir: &Path) -> Result<Arc<dyn SpeechModel>> {
    model_paths::prepare_cache_dir(cache_dir)?;

    tracing::info!(
        model = repo_id,
        cache_dir = %cache_dir.display(),
        "Loading KittenTTS model"
    );

    load_backend(repo_id)
}

#[cfg(feature = "kitten")]
fn load_backend(repo_id: &str) -> Result<Arc<dyn SpeechModel>> {
    let model = KittenModel::from_hub(repo_id)?;

    let missing: Vec<&str> = Voice::all()
        .iter()
        .map(|v| v.id())
        .filter(|id| !model.available_voices().iter().any(|name| name == id))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(?missing, "Model does not list some voices");
    }

    tracing::info!("Model loaded");
    Ok(Arc::new(model))
}

#[cfg(not(feature = "kitten"))]
fn load_backend(repo_id: &str) -> Result<Arc<dyn SpeechModel>> {
    Err(TtsError::ModelLoad(format!(
        "cannot load '{}': built without the `kitten` feature",
        repo_id
    )))
}
