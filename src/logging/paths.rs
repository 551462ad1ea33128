use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the log directory, creating it if needed
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. KITTEN_LOG_DIR environment variable
/// 3. Per-user data directory (`<data_local_dir>/kitten-tts/logs`)
/// 4. Temp directory as last resort
pub fn get_log_directory(custom_dir: Option<&str>) -> io::Result<PathBuf> {
    if let Some(dir) = custom_dir {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    if let Ok(dir) = env::var("KITTEN_LOG_DIR") {
        if !dir.trim().is_empty() {
            return ensure_directory_exists(PathBuf::from(dir));
        }
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        let path = data_dir.join("kitten-tts").join("logs");
        if can_create(&path) {
            return ensure_directory_exists(path);
        }
    }

    ensure_directory_exists(env::temp_dir().join("kitten_tts_logs"))
}

/// Check if a directory is writable
fn is_writable(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let test_file = path.join(".write_test");
    let ok = fs::write(&test_file, "test").is_ok();
    let _ = fs::remove_file(&test_file);
    ok
}

/// Check whether `path` exists and is writable, or its nearest existing
/// ancestor is
fn can_create(path: &Path) -> bool {
    path.ancestors()
        .find(|p| p.exists())
        .map(is_writable)
        .unwrap_or(false)
}

fn ensure_directory_exists(path: PathBuf) -> io::Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
