use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve the Hugging Face cache directory
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. HF_HOME environment variable
/// 3. `.cache/huggingface` under the current directory
pub fn resolve_cache_dir(custom_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = custom_dir {
        return PathBuf::from(dir);
    }

    if let Ok(dir) = env::var("HF_HOME") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".cache")
        .join("huggingface")
}

/// Create the cache directory and point the Hugging Face client at it
pub fn prepare_cache_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    env::set_var("HF_HOME", path);
    Ok(())
}
