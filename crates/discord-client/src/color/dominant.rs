//! Avatar-derived display color.
//!
//! The avatar bytes are NOT decoded. The compressed PNG file is padded to a
//! 4-byte boundary and handed to the quantizer as if it were RGBA pixels.
//! The result tracks the file's byte distribution rather than what the
//! image looks like. This approximation is intentional and must stay until
//! real image decoding is explicitly wanted.

use super::palette::PaletteQuantizer;
use super::default_display_color;
use crate::api::DiscordApiClient;
use crate::api::models::UserProfile;
use crate::assets::{ImageFormat, avatar_url};
use crate::DiscordError;

/// Returned when the avatar cannot be fetched.
pub const FETCH_FAILED_COLOR: &str = "#000000";

const ALIGNMENT: usize = 4;

/// Zero-fill `bytes` up to the next multiple of 4.
pub fn pad_to_alignment(mut bytes: Vec<u8>) -> Vec<u8> {
    let rem = bytes.len() % ALIGNMENT;
    if rem != 0 {
        bytes.resize(bytes.len() + ALIGNMENT - rem, 0);
    }
    bytes
}

/// Most prevalent color of the raw (undecoded) bytes as `#rrggbb`.
pub fn dominant_color(bytes: Vec<u8>, quantizer: &dyn PaletteQuantizer) -> String {
    let padded = pad_to_alignment(bytes);
    quantizer
        .quantize(&padded, 1)
        .first()
        .map(|entry| entry.to_hex())
        .unwrap_or_else(|| FETCH_FAILED_COLOR.to_string())
}

impl DiscordApiClient {
    /// Display color for a profile.
    ///
    /// Never fails: users without an avatar get a default palette color and
    /// a failed avatar fetch yields [`FETCH_FAILED_COLOR`].
    pub async fn resolve_display_color(&self, profile: &UserProfile) -> String {
        if profile.avatar_hash().is_none() {
            return default_display_color(profile).to_string();
        }

        // Always a static format, even for animated avatars.
        let url = avatar_url(&self.config.cdn_base, profile, Some(ImageFormat::Png));
        match self.fetch_bytes(&url).await {
            Ok(bytes) => dominant_color(bytes, self.quantizer.as_ref()),
            Err(error) => {
                tracing::warn!(user_id = %profile.id, %error, "Failed to fetch avatar for color");
                FETCH_FAILED_COLOR.to_string()
            }
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, DiscordError> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DiscordError::UpstreamError {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}
