use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// 64-bit Discord ID. Decimal text on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// Milliseconds since the Discord epoch, taken from the high 42 bits.
    pub fn timestamp_ms(self) -> u64 {
        self.0 >> 22
    }

    pub fn created_at(self) -> Option<DateTime<Utc>> {
        let unix_ms = i64::try_from(self.timestamp_ms() + DISCORD_EPOCH_MS).ok()?;
        DateTime::from_timestamp_millis(unix_ms)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u64>()
            .map(Snowflake)
            .map_err(|e| serde::de::Error::custom(format!("invalid snowflake {raw:?}: {e}")))
    }
}

/// `avatar_decoration_data` object on newer API versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDecorationData {
    pub asset: String,
    #[serde(default)]
    pub sku_id: Option<String>,
}

/// User object from GET /users/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub public_flags: u64,
    #[serde(default)]
    pub accent_color: Option<u32>,
    // Hex string, unlike accent_color.
    #[serde(default)]
    pub banner_color: Option<String>,
    #[serde(default)]
    pub avatar_decoration: Option<String>,
    #[serde(default)]
    pub avatar_decoration_data: Option<AvatarDecorationData>,
}

impl UserProfile {
    /// Migrated to unique usernames (discriminator `"0"` or empty).
    pub fn is_pomelo(&self) -> bool {
        matches!(self.discriminator.as_str(), "" | "0")
    }

    /// Legacy discriminator as a number; non-numeric values count as 0.
    pub fn discriminator_number(&self) -> u64 {
        self.discriminator.parse().unwrap_or(0)
    }

    pub fn display_name(&self) -> &str {
        self.global_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// `@name` for migrated accounts, `name#1234` otherwise.
    pub fn tag(&self) -> String {
        if self.is_pomelo() {
            format!("@{}", self.username)
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    pub fn avatar_hash(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|hash| !hash.is_empty())
    }

    pub fn banner_hash(&self) -> Option<&str> {
        self.banner.as_deref().filter(|hash| !hash.is_empty())
    }

    /// Decoration hash from either the legacy field or the newer object.
    pub fn decoration_hash(&self) -> Option<&str> {
        self.avatar_decoration
            .as_deref()
            .or_else(|| self.avatar_decoration_data.as_ref().map(|d| d.asset.as_str()))
            .filter(|hash| !hash.is_empty())
    }
}

/// Everything needed to render a profile card.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedProfile {
    pub id: Snowflake,
    pub username: String,
    pub display_name: String,
    pub tag: String,
    pub avatar_url: String,
    pub banner_url: Option<String>,
    pub badges: Vec<&'static str>,
    pub color: String,
    pub accent_color: Option<String>,
    pub banner_color: Option<String>,
    pub created_at: Option<String>,
}
