use clap::Parser;
use std::net::SocketAddr;

use kitten_tts_server::audio::wav_utils::{duration_ms, write_wav_file};
use kitten_tts_server::cli::{print_voices, Cli};
use kitten_tts_server::config::ServerConfig;
use kitten_tts_server::error::{self, TtsError};
use kitten_tts_server::kitten::load_model;
use kitten_tts_server::logging::{self, LogConfig};
use kitten_tts_server::models::requests::validate_speed;
use kitten_tts_server::server::{create_router, AppState};
use kitten_tts_server::services::synthesis::synthesize_safe;
use kitten_tts_server::text_processing::normalization::normalize;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.list_voices {
        print_voices();
        return Ok(());
    }

    let mut log_config = LogConfig::from_env();
    if !cli.server {
        // One-shot runs only log to the console
        log_config.file_enabled = false;
    }
    // Held until exit so buffered file logs are flushed
    let _log_guards = logging::init_logging(&log_config)
        .map_err(|e| TtsError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;

    let mut config = ServerConfig::from_env();
    if let Some(host) = &cli.host {
        config.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.model_repo = cli.model_repo(&config.model_repo).to_string();

    if cli.server {
        run_server(config, &log_config).await
    } else {
        run_once(&cli, &config).await
    }
}

async fn run_server(config: ServerConfig, log_config: &LogConfig) -> error::Result<()> {
    logging::log_platform_info();

    let model = load_model(&config.model_repo, &config.cache_dir)?;

    let mut state = AppState::new(model);
    state.slow_request_threshold_ms = log_config.slow_request_threshold_ms;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("KittenTTS Server v{}", env!("CARGO_PKG_VERSION"));
    println!("Listening on http://{}", addr);
    println!("\nAvailable endpoints:");
    println!("  GET    /                     - Web interface");
    println!("  GET    /api/voices           - List available voices");
    println!("  POST   /api/generate         - Generate speech (WAV download)");
    println!("  POST   /api/generate-stream  - Generate speech (base64 data URI)");
    println!("  GET    /health               - Health check");

    tracing::info!(address = %addr, model = %config.model_repo, "Server listening");

    let app = create_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn run_once(cli: &Cli, config: &ServerConfig) -> error::Result<()> {
    let speed = validate_speed(cli.speed)?;
    let text = normalize(&cli.text);
    if text.is_empty() {
        return Err(TtsError::EmptyText);
    }

    let model = load_model(&config.model_repo, &config.cache_dir)?;

    println!("Generating speech for: \"{}\"", text);

    let voice = cli.voice;
    let synthesis =
        tokio::task::spawn_blocking(move || synthesize_safe(model.as_ref(), &text, voice, speed))
            .await??;

    tracing::debug!(strategy = ?synthesis.strategy, "Synthesis finished");

    write_wav_file(&cli.output, &synthesis.samples, cli.sample_rate)?;

    println!(
        "Saved speech to {} ({:.2}s)",
        cli.output.display(),
        duration_ms(synthesis.samples.len(), cli.sample_rate) / 1000.0
    );

    Ok(())
}
