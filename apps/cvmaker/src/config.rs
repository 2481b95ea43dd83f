use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Every setting has a default so the binary runs with zero environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the CV document is persisted between sessions.
    pub storage_path: PathBuf,
    /// Directory the export adapter writes finished documents into.
    pub export_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            storage_path: env_or("CV_STORAGE_PATH", "cv_maker.json").into(),
            export_dir: env_or("CV_EXPORT_DIR", ".").into(),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
