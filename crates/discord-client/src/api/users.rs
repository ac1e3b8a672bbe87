use super::*;
use crate::assets::{avatar_url, banner_url};
use crate::color::num_to_hex;
use crate::flags::decode_flags;
use crate::route::{decode_segment, encode_route};

/// Path segment that makes `/users/{id}` return the bot itself.
const SELF_REFERENCE: &str = "@me";

/// `/users/{id}` for an untrusted ID.
pub(super) fn user_path(user_id: &str) -> Result<String, DiscordError> {
    if decode_segment(user_id)? == SELF_REFERENCE {
        return Err(DiscordError::Unauthorized);
    }
    encode_route("/users/{}", &[user_id])
}

pub(super) fn parse_user(body: &str) -> Result<UserProfile, DiscordError> {
    Ok(serde_json::from_str(body)?)
}

impl DiscordApiClient {
    /// The request [`get_user`](Self::get_user) would send, without sending it.
    pub fn user_request(&self, user_id: &str) -> Result<reqwest::Request, DiscordError> {
        let path = user_path(user_id)?;
        self.build_get(&path, Some(EdgeCacheHint::USER))
    }

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<UserProfile, DiscordError> {
        let path = user_path(user_id)?;
        let body = self
            .authenticated_get(&path, Some(EdgeCacheHint::USER))
            .await?;
        parse_user(&body)
    }

    /// Fetch a user and derive everything a profile card shows.
    pub async fn resolve_profile(
        &self,
        user_id: &str,
        guess_nitro: bool,
    ) -> Result<ResolvedProfile, DiscordError> {
        let user = self.get_user(user_id).await?;
        let color = self.resolve_display_color(&user).await;
        Ok(self.present(user, color, guess_nitro))
    }

    pub(super) fn present(
        &self,
        user: UserProfile,
        color: String,
        guess_nitro: bool,
    ) -> ResolvedProfile {
        let cdn = self.config.cdn_base.as_str();

        ResolvedProfile {
            id: user.id,
            display_name: user.display_name().to_string(),
            tag: user.tag(),
            avatar_url: avatar_url(cdn, &user, None),
            banner_url: banner_url(cdn, &user),
            badges: decode_flags(&user, guess_nitro),
            color,
            accent_color: user.accent_color.map(num_to_hex),
            banner_color: user.banner_color.clone(),
            created_at: user.id.created_at().map(|t| t.to_rfc3339()),
            username: user.username,
        }
    }
}
