use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::*;

const CDN_CACHE_CONTROL: HeaderName = HeaderName::from_static("cdn-cache-control");

/// Cache hint for a caching proxy placed between this client and the API.
///
/// Sent as a `CDN-Cache-Control` request header. That header is normally a
/// response header, so Discord's own edge ignores it; it only has an effect
/// behind a proxy you run that reads it from requests. Purely an
/// optimization: a miss reissues the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCacheHint {
    pub ttl: Duration,
    /// Cache even when the origin's own cache headers say otherwise.
    pub cache_everything: bool,
}

impl EdgeCacheHint {
    /// Users change rarely; ten minutes.
    pub const USER: Self = Self {
        ttl: Duration::from_secs(600),
        cache_everything: true,
    };

    pub fn header_value(&self) -> HeaderValue {
        let value = if self.cache_everything {
            format!("public, max-age={}", self.ttl.as_secs())
        } else {
            format!("max-age={}", self.ttl.as_secs())
        };
        // Only ASCII digits and punctuation.
        HeaderValue::from_str(&value).unwrap_or(HeaderValue::from_static("no-store"))
    }
}

impl DiscordApiClient {
    /// Build auth headers from the configured bot token.
    fn auth_headers(&self) -> Result<HeaderMap, DiscordError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bot {}", self.config.token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Build an authenticated GET for an already-encoded API path.
    pub(super) fn build_get(
        &self,
        path: &str,
        cache: Option<EdgeCacheHint>,
    ) -> Result<reqwest::Request, DiscordError> {
        let url = Url::parse(&format!("{}{path}", self.config.api_base))?;
        let mut headers = self.auth_headers()?;
        if let Some(hint) = cache {
            headers.insert(CDN_CACHE_CONTROL, hint.header_value());
        }

        Ok(self.http.get(url).headers(headers).build()?)
    }

    /// Execute an authenticated GET and return the body text.
    pub(super) async fn authenticated_get(
        &self,
        path: &str,
        cache: Option<EdgeCacheHint>,
    ) -> Result<String, DiscordError> {
        let request = self.build_get(path, cache)?;
        tracing::debug!(path, "Discord API request");
        let resp = self.http.execute(request).await?;

        let status = resp.status();
        if !status.is_success() {
            // A failed body read must not mask the status.
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "Discord API returned an error");
            return Err(DiscordError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.text().await?)
    }
}
