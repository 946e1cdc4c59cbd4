use std::path::PathBuf;

use anyhow::{Context, Result};

/// Binary configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// CV JSON file to render.
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Overrides the CV's own `template` when set.
    pub style: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            input: require_env("VITAE_INPUT")?.into(),
            output_dir: std::env::var("VITAE_OUTPUT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            style: std::env::var("VITAE_STYLE")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
