pub mod config;
pub mod middleware;
pub mod paths;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::LogConfig;
pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

/// Initialize console logging and, when enabled, the JSON log files
///
/// File logging writes two daily-rolling files in the log directory:
/// `access.log` (events with target `access_log`) and `application.log`
/// (everything else). The returned guards flush the file writers when
/// dropped, so the caller must hold them for the life of the process.
pub fn init_logging(config: &LogConfig) -> Result<Vec<WorkerGuard>, Box<dyn std::error::Error>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_filter(EnvFilter::try_new(&config.console_log_level)?);

    if !config.file_enabled {
        tracing_subscriber::registry().with(console_layer).try_init()?;
        tracing::debug!("File logging disabled");
        return Ok(Vec::new());
    }

    let log_dir = paths::get_log_directory(config.custom_log_dir.as_deref())?;

    let access_appender = tracing_appender::rolling::daily(&log_dir, "access.log");
    let app_appender = tracing_appender::rolling::daily(&log_dir, "application.log");

    let (access_writer, access_guard) = tracing_appender::non_blocking(access_appender);
    let (app_writer, app_guard) = tracing_appender::non_blocking(app_appender);

    let access_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(access_writer)
        .with_filter(EnvFilter::new("off,access_log=info"));

    let app_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(app_writer)
        .with_filter(
            EnvFilter::try_new(&config.file_log_level)?
                // Access events go to their own file
                .add_directive("access_log=off".parse()?),
        );

    tracing_subscriber::registry()
        .with(console_layer)
        .with(access_layer)
        .with(app_layer)
        .try_init()?;

    tracing::info!(log_dir = %log_dir.display(), "Logging initialized");

    Ok(vec![access_guard, app_guard])
}

/// Log platform-specific information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Server starting"
    );
}
