//! Discord REST API client.
//!
//! Only the user lookup is modeled. Requests carry the bot token and an
//! edge-cache hint; non-success responses become
//! [`DiscordError::UpstreamError`] and are never retried.

mod request;
mod users;

pub mod models;

pub use models::{AvatarDecorationData, ResolvedProfile, Snowflake, UserProfile};
pub use request::EdgeCacheHint;

use std::sync::Arc;

use crate::color::{MedianCut, PaletteQuantizer};
use crate::{ClientConfig, DiscordError};

/// Discord API client with bot token header injection.
pub struct DiscordApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) quantizer: Arc<dyn PaletteQuantizer>,
}

impl DiscordApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            quantizer: Arc::new(MedianCut),
        }
    }

    /// Replace the palette quantizer used for avatar colors.
    pub fn with_quantizer(mut self, quantizer: Arc<dyn PaletteQuantizer>) -> Self {
        self.quantizer = quantizer;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
