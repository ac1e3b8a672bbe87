//! HTTP front end for resolving Discord user profiles.

pub mod app;
pub mod config;
pub mod server;

use config::AppConfig;

/// Load `.env` and the runtime config.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    config::load_dotenv();
    let config = AppConfig::from_env()?;
    tracing::info!(?config, "Configuration loaded");
    Ok(config)
}
