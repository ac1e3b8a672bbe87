//! Discord user profile client library.
//!
//! Resolves a user ID into a presentable profile: the authenticated
//! user lookup, CDN asset URLs, public flag badges and a display color
//! derived from the avatar.

pub mod api;
pub mod assets;
pub mod color;
pub mod flags;
pub mod route;

use std::fmt;

pub const API_BASE: &str = "https://discord.com/api/v10";
pub const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Connection settings for the Discord API and CDN.
///
/// Passed explicitly to [`api::DiscordApiClient::new`]; the client never
/// reads the environment itself.
#[derive(Clone)]
pub struct ClientConfig {
    pub token: String,
    pub api_base: String,
    pub cdn_base: String,
}

impl ClientConfig {
    /// Config pointing at the public Discord endpoints.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: API_BASE.into(),
            cdn_base: CDN_BASE.into(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"********")
            .field("api_base", &self.api_base)
            .field("cdn_base", &self.cdn_base)
            .finish()
    }
}

/// Unified error type for the discord-client crate.
#[derive(Debug, thiserror::Error)]
pub enum DiscordError {
    #[error("invalid path segment: {0:?}")]
    InvalidSegment(String),

    #[error("route template expects {expected} segments, got {got}")]
    RouteTemplate { expected: usize, got: usize },

    #[error("refusing to resolve the bot's own identity")]
    Unauthorized,

    #[error("Discord API error (status {status}): {body}")]
    UpstreamError { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}
