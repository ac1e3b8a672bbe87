use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use discord_client::DiscordError;
use discord_client::api::ResolvedProfile;
use serde::Deserialize;
use serde_json::Value;

use super::err_json;
use crate::app::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub guess_nitro: Option<bool>,
}

/// GET /api/users/{id}
pub async fn get_profile(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ResolvedProfile>, (StatusCode, Json<Value>)> {
    let guess_nitro = query.guess_nitro.unwrap_or(state.config().guess_nitro);

    match state.discord().resolve_profile(&id, guess_nitro).await {
        Ok(profile) => Ok(Json(profile)),
        Err(e) => {
            tracing::warn!(user_id = %id, error = %e, "Failed to resolve profile");
            Err(map_discord_error(e))
        }
    }
}

fn map_discord_error(err: DiscordError) -> (StatusCode, Json<Value>) {
    match err {
        DiscordError::InvalidSegment(_) | DiscordError::RouteTemplate { .. } => {
            err_json(400, &err.to_string())
        }
        DiscordError::Unauthorized => err_json(403, &err.to_string()),
        DiscordError::UpstreamError { status, .. } => err_json(status, &err.to_string()),
        DiscordError::Decode(_) => err_json(502, &err.to_string()),
        other => err_json(500, &other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> SharedState {
        SharedState::new(AppConfig {
            discord_token: "t".into(),
            api_base: "http://127.0.0.1:9".into(),
            cdn_base: "http://127.0.0.1:9".into(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn error_status_mapping() {
        let cases = [
            (DiscordError::InvalidSegment("a/b".into()), StatusCode::BAD_REQUEST),
            (DiscordError::Unauthorized, StatusCode::FORBIDDEN),
            (
                DiscordError::UpstreamError {
                    status: 404,
                    body: "Unknown User".into(),
                },
                StatusCode::NOT_FOUND,
            ),
            (
                DiscordError::Decode(serde_json::from_str::<Value>("{").unwrap_err()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            let (status, body) = map_discord_error(err);
            assert_eq!(status, expected);
            assert_eq!(body.0["status"], "error");
        }
    }

    #[tokio::test]
    async fn self_reference_is_forbidden() {
        let result = get_profile(
            State(state()),
            Path("@me".to_string()),
            Query(ProfileQuery::default()),
        )
        .await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0["error"], "refusing to resolve the bot's own identity");
    }

    #[tokio::test]
    async fn traversal_is_bad_request() {
        let result = get_profile(
            State(state()),
            Path("../guilds/1".to_string()),
            Query(ProfileQuery::default()),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn transport_failure_is_internal_error() {
        let result = get_profile(
            State(state()),
            Path("80351110224678912".to_string()),
            Query(ProfileQuery {
                guess_nitro: Some(false),
            }),
        )
        .await;

        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
