use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub upload_dir: PathBuf,
    /// Absent key is not fatal: the analyzer reports it per upload.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", "sqlite://resumes.db"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploaded_resumes")),
            google_api_key: optional_env("GOOGLE_API_KEY"),
            gemini_model: env_or("GEMINI_MODEL", "gemini-pro"),
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Treats an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
