//! CDN URL derivation for avatars and banners.
//!
//! Pure functions over an already-fetched [`UserProfile`]; nothing here
//! touches the network.

use std::fmt;

use crate::api::models::{Snowflake, UserProfile};

/// Hash prefix marking an animated asset.
pub const ANIMATED_PREFIX: &str = "a_";

const AVATAR_QUERY: &str = "size=256&quality=lossless";
const BANNER_QUERY: &str = "size=512&quality=lossless";

/// Default avatars available to migrated (pomelo) accounts.
const POMELO_DEFAULT_AVATARS: u64 = 6;
/// Legacy discriminator accounts only ever had five.
const LEGACY_DEFAULT_AVATARS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    Banner,
}

impl AssetKind {
    fn path(self) -> &'static str {
        match self {
            AssetKind::Avatar => "avatars",
            AssetKind::Banner => "banners",
        }
    }

    fn query(self) -> &'static str {
        match self {
            AssetKind::Avatar => AVATAR_QUERY,
            AssetKind::Banner => BANNER_QUERY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
            ImageFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn is_animated(hash: &str) -> bool {
    hash.starts_with(ANIMATED_PREFIX)
}

/// A user-owned CDN image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference<'a> {
    pub owner_id: Snowflake,
    pub hash: &'a str,
    pub kind: AssetKind,
    pub animated: bool,
}

impl<'a> AssetReference<'a> {
    pub fn new(owner_id: Snowflake, hash: &'a str, kind: AssetKind) -> Self {
        Self {
            owner_id,
            hash,
            kind,
            animated: is_animated(hash),
        }
    }

    /// `gif` for animated hashes, `webp` otherwise.
    pub fn natural_format(&self) -> ImageFormat {
        if self.animated {
            ImageFormat::Gif
        } else {
            ImageFormat::Webp
        }
    }

    pub fn url(&self, cdn_base: &str, format: Option<ImageFormat>) -> String {
        let ext = format.unwrap_or_else(|| self.natural_format());
        format!(
            "{cdn_base}/{}/{}/{}.{ext}?{}",
            self.kind.path(),
            self.owner_id,
            self.hash,
            self.kind.query()
        )
    }
}

impl UserProfile {
    pub fn avatar_asset(&self) -> Option<AssetReference<'_>> {
        self.avatar_hash()
            .map(|hash| AssetReference::new(self.id, hash, AssetKind::Avatar))
    }

    pub fn banner_asset(&self) -> Option<AssetReference<'_>> {
        self.banner_hash()
            .map(|hash| AssetReference::new(self.id, hash, AssetKind::Banner))
    }
}

/// Index into `/embed/avatars/{index}.png` for users without a custom avatar.
///
/// Pomelo accounts derive it from the snowflake (`(id >> 22) % 6`), legacy
/// accounts from the discriminator (`discriminator % 5`).
pub fn default_avatar_index(profile: &UserProfile) -> u64 {
    if profile.is_pomelo() {
        (profile.id.0 >> 22) % POMELO_DEFAULT_AVATARS
    } else {
        profile.discriminator_number() % LEGACY_DEFAULT_AVATARS
    }
}

pub fn default_avatar_url(cdn_base: &str, profile: &UserProfile) -> String {
    format!(
        "{cdn_base}/embed/avatars/{}.png",
        default_avatar_index(profile)
    )
}

/// Avatar URL, falling back to the default avatar when no hash is set.
pub fn avatar_url(cdn_base: &str, profile: &UserProfile, format: Option<ImageFormat>) -> String {
    match profile.avatar_asset() {
        Some(asset) => asset.url(cdn_base, format),
        None => default_avatar_url(cdn_base, profile),
    }
}

/// Banner URL, or `None` when the user has no banner.
pub fn banner_url(cdn_base: &str, profile: &UserProfile) -> Option<String> {
    profile.banner_asset().map(|asset| asset.url(cdn_base, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CDN_BASE;

    fn profile(value: serde_json::Value) -> UserProfile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn pomelo_default_avatar_uses_snowflake() {
        let user = profile(serde_json::json!({
            "id": "1000000000000000000",
            "username": "someone",
            "discriminator": "0",
            "avatar": null
        }));

        let expected = (1_000_000_000_000_000_000u64 >> 22) % 6;
        assert_eq!(default_avatar_index(&user), expected);
        assert_eq!(
            avatar_url(CDN_BASE, &user, None),
            format!("{CDN_BASE}/embed/avatars/{expected}.png")
        );
        // Same input, same answer.
        assert_eq!(avatar_url(CDN_BASE, &user, None), avatar_url(CDN_BASE, &user, None));
    }

    #[test]
    fn empty_discriminator_counts_as_pomelo() {
        let user = profile(serde_json::json!({
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": ""
        }));
        assert_eq!(default_avatar_index(&user), (80351110224678912u64 >> 22) % 6);
    }

    #[test]
    fn legacy_default_avatar_uses_discriminator_mod_five() {
        let user = profile(serde_json::json!({
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": "4242"
        }));
        assert_eq!(default_avatar_index(&user), 2);
        assert_eq!(
            avatar_url(CDN_BASE, &user, None),
            "https://cdn.discordapp.com/embed/avatars/2.png"
        );
    }

    #[test]
    fn extension_follows_hash_prefix() {
        let animated = profile(serde_json::json!({
            "id": "1", "username": "a", "discriminator": "0", "avatar": "a_abc123"
        }));
        let still = profile(serde_json::json!({
            "id": "1", "username": "a", "discriminator": "0", "avatar": "abc123"
        }));

        assert_eq!(
            avatar_url(CDN_BASE, &animated, None),
            "https://cdn.discordapp.com/avatars/1/a_abc123.gif?size=256&quality=lossless"
        );
        assert_eq!(
            avatar_url(CDN_BASE, &still, None),
            "https://cdn.discordapp.com/avatars/1/abc123.webp?size=256&quality=lossless"
        );
    }

    #[test]
    fn format_override_wins() {
        let animated = profile(serde_json::json!({
            "id": "1", "username": "a", "discriminator": "0", "avatar": "a_abc123"
        }));
        assert_eq!(
            avatar_url(CDN_BASE, &animated, Some(ImageFormat::Png)),
            "https://cdn.discordapp.com/avatars/1/a_abc123.png?size=256&quality=lossless"
        );
        assert_eq!(
            avatar_url(CDN_BASE, &animated, Some(ImageFormat::Jpeg)),
            "https://cdn.discordapp.com/avatars/1/a_abc123.jpg?size=256&quality=lossless"
        );
    }

    #[test]
    fn banner_absent_or_present() {
        let none = profile(serde_json::json!({
            "id": "7", "username": "a", "discriminator": "0", "banner": null
        }));
        assert_eq!(banner_url(CDN_BASE, &none), None);

        let animated = profile(serde_json::json!({
            "id": "7", "username": "a", "discriminator": "0", "banner": "a_ffff"
        }));
        assert_eq!(
            banner_url(CDN_BASE, &animated).as_deref(),
            Some("https://cdn.discordapp.com/banners/7/a_ffff.gif?size=512&quality=lossless")
        );
    }

    #[test]
    fn asset_reference_flags_animation() {
        let asset = AssetReference::new(Snowflake(5), "a_x", AssetKind::Avatar);
        assert!(asset.animated);
        assert_eq!(asset.natural_format(), ImageFormat::Gif);
        assert!(!AssetReference::new(Snowflake(5), "x_a", AssetKind::Banner).animated);
    }
}
