use std::path::PathBuf;

use clap::Parser;

use crate::config::constants::{DEFAULT_SPEED, SAMPLE_RATE};
use crate::kitten::voice_config::Voice;

pub const DEFAULT_TEXT: &str = "This is a running example for KittenTTS.";

/// KittenTTS speech synthesis: one-shot CLI or HTTP server
#[derive(Debug, Parser)]
#[command(name = "kitten_tts_server", version, about)]
pub struct Cli {
    /// Start the HTTP server instead of synthesizing once
    #[arg(long)]
    pub server: bool,

    /// Server bind host (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Server port (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Hugging Face repo id of the model (overrides KITTEN_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Text to synthesize
    #[arg(long, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Voice to use
    #[arg(long, default_value_t = Voice::DEFAULT)]
    pub voice: Voice,

    /// Speech speed, between 0.5 and 2.0
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Output WAV file
    #[arg(long, default_value = "output.wav")]
    pub output: PathBuf,

    /// Sample rate written to the WAV header (no resampling)
    #[arg(long, default_value_t = SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Print available voices and exit
    #[arg(long)]
    pub list_voices: bool,
}

impl Cli {
    /// Model repo from the flag, falling back to the configured one
    pub fn model_repo<'a>(&'a self, configured: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(configured)
    }
}

pub fn print_voices() {
    println!("Available voices:");
    for voice in Voice::all() {
        let marker = if *voice == Voice::DEFAULT { " (default)" } else { "" };
        println!("- {}{}", voice, marker);
    }
}
