use std::sync::Arc;

use discord_client::api::DiscordApiClient;

use crate::config::AppConfig;

/// State shared by all axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    config: AppConfig,
    client: DiscordApiClient,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        let client = DiscordApiClient::new(config.client_config());
        Self::with_client(config, client)
    }

    /// Use a pre-built client (e.g. with a custom quantizer).
    pub fn with_client(config: AppConfig, client: DiscordApiClient) -> Self {
        Self {
            inner: Arc::new(SharedStateInner { config, client }),
        }
    }

    pub fn server_port(&self) -> u16 {
        self.inner.config.server_port
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn discord(&self) -> &DiscordApiClient {
        &self.inner.client
    }
}
