use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Custom log directory path (overrides auto-detection)
    pub custom_log_dir: Option<String>,

    /// Filter for console output
    pub console_log_level: String,

    /// Filter for the application log file (default: "debug")
    pub file_log_level: String,

    /// Write access and application logs to files (default: true)
    pub file_enabled: bool,

    /// Slow request threshold in milliseconds (default: 5000)
    pub slow_request_threshold_ms: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            custom_log_dir: None,
            console_log_level: "kitten_tts_server=info,ort=warn,kittentts=warn".to_string(),
            file_log_level: "debug".to_string(),
            file_enabled: true,
            slow_request_threshold_ms: 5000,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("KITTEN_LOG_DIR") {
            if !dir.trim().is_empty() {
                config.custom_log_dir = Some(dir);
            }
        }

        if let Ok(filter) = env::var("RUST_LOG") {
            config.console_log_level = filter;
        }

        if let Ok(level) = env::var("KITTEN_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Ok(val) = env::var("LOG_FILE_ENABLED") {
            config.file_enabled = val.to_lowercase() == "true";
        }

        if let Ok(val) = env::var("LOG_SLOW_REQUEST_THRESHOLD_MS") {
            if let Ok(threshold) = val.parse() {
                config.slow_request_threshold_ms = threshold;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert!(config.custom_log_dir.is_none());
        assert_eq!(config.file_log_level, "debug");
        assert!(config.file_enabled);
        assert_eq!(config.slow_request_threshold_ms, 5000);
        assert!(config.console_log_level.contains("kitten_tts_server=info"));
    }

    #[test]
    fn test_from_env_custom_values() {
        env::set_var("KITTEN_FILE_LOG_LEVEL", "trace");
        env::set_var("LOG_FILE_ENABLED", "FALSE");
        env::set_var("LOG_SLOW_REQUEST_THRESHOLD_MS", "250");

        let config = LogConfig::from_env();
        assert_eq!(config.file_log_level, "trace");
        assert!(!config.file_enabled);
        assert_eq!(config.slow_request_threshold_ms, 250);

        env::set_var("LOG_SLOW_REQUEST_THRESHOLD_MS", "soon");
        assert_eq!(LogConfig::from_env().slow_request_threshold_ms, 5000);

        // Cleanup
        env::remove_var("KITTEN_FILE_LOG_LEVEL");
        env::remove_var("LOG_FILE_ENABLED");
        env::remove_var("LOG_SLOW_REQUEST_THRESHOLD_MS");
    }
}
