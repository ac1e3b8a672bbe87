//! Runtime configuration populated from environment variables.

use std::fmt;

use anyhow::bail;
use discord_client::{API_BASE, CDN_BASE, ClientConfig};

/// Runtime configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub api_base: String,
    pub cdn_base: String,
    pub server_port: u16,
    pub guess_nitro: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            discord_token: String::new(),
            api_base: API_BASE.into(),
            cdn_base: CDN_BASE.into(),
            server_port: 8080,
            guess_nitro: true,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &mask(&self.discord_token))
            .field("api_base", &self.api_base)
            .field("cdn_base", &self.cdn_base)
            .field("server_port", &self.server_port)
            .field("guess_nitro", &self.guess_nitro)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`; unset keys keep their defaults.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String { lookup(key).unwrap_or_default().trim().to_string() };
        let defaults = Self::default();

        let discord_token = g("DISCORD_TOKEN");
        if discord_token.is_empty() {
            bail!("DISCORD_TOKEN is not set");
        }

        Ok(Self {
            discord_token,
            api_base: non_empty_or(g("DISCORD_API_BASE"), defaults.api_base),
            cdn_base: non_empty_or(g("DISCORD_CDN_BASE"), defaults.cdn_base),
            server_port: parse_u16(&g("SERVER_PORT"), defaults.server_port),
            guess_nitro: parse_bool(&g("GUESS_NITRO"), defaults.guess_nitro),
        })
    }

    /// Connection settings for the Discord client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            token: self.discord_token.clone(),
            api_base: self.api_base.clone(),
            cdn_base: self.cdn_base.clone(),
        }
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "********" }
}

fn non_empty_or(value: String, default: String) -> String {
    let value = value.trim_end_matches('/').to_string();
    if value.is_empty() { default } else { value }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        _ => default,
    }
}
