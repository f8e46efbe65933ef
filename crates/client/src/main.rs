//! VimRunner terminal client entry point.
mod app;
mod config;
mod input;
mod logging;
mod presentation;
mod state;

use anyhow::Result;
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    let _log_guard = logging::setup_logging(&config.session_id)?;

    tracing::info!("Starting VimRunner");
    let result = app::run(config).await;
    if let Err(err) = &result {
        tracing::error!("VimRunner exited with error: {:#}", err);
    }
    result
}
