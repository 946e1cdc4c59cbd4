mod config;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vitae::{generate, Cv};

use crate::config::Config;

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));

    let json = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read CV from {}", config.input.display()))?;
    let cv = Cv::from_json(&json)
        .with_context(|| format!("Failed to parse CV in {}", config.input.display()))?;

    let style = config.style.as_deref().unwrap_or_else(|| cv.style_id());
    let document = generate(&cv, style).context("CV generation failed")?;
    let path = document
        .persist(&config.output_dir)
        .context("Failed to save generated CV")?;

    info!(
        path = %path.display(),
        style = document.style_id,
        pages = document.page_count,
        "Done"
    );
    Ok(())
}
