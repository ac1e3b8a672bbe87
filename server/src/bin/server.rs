//! Headless profile server.
//!
//! Loads config, starts the axum server and stops on Ctrl+C.

use tracing_subscriber::EnvFilter;

use profile_server_lib::app::SharedState;
use profile_server_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Discord profile server");

    let config = profile_server_lib::init_config()?;
    let state = SharedState::new(config);

    server::start_server(state, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
        tracing::info!("Shutting down...");
    })
    .await
}
