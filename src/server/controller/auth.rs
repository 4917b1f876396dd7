use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::server::{
    controller::found,
    error::AppError,
    service::{identity::IdentityService, oauth::DiscordAuthService},
    state::AppState,
};

/// Query string parameter carrying the Discord id on the post-login redirect.
const DISCORD_ID_PARAM: &str = "discord_id";

/// Query parameters for the OAuth callback endpoint.
///
/// Both are optional so that a missing value is reported by the service as a specific
/// auth error instead of axum's generic query rejection.
///
/// # Fields
/// - `code` - Authorization code used to exchange for access tokens
/// - `state` - Signed state token issued by `/auth/login`
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// Redirects the browser to Discord's consent screen.
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.config.discord, &state.signer);

    let url = auth_service.login_url()?;

    Ok(found(url.to_string()))
}

/// Completes the login, stores the profile and sends the browser back to the frontend.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.http_client, &state.config.discord, &state.signer);
    let identity_service = IdentityService::new(state.store.as_ref(), &state.config.appwrite);

    let identity = auth_service
        .callback(params.code.as_deref(), params.state.as_deref())
        .await?;
    identity_service.store(&identity).await?;

    let discord_id: String = url::form_urlencoded::byte_serialize(identity.id().as_bytes()).collect();
    let location = format!(
        "{}/?{DISCORD_ID_PARAM}={discord_id}",
        state.config.frontend_origin.trim_end_matches('/')
    );

    Ok(found(location))
}
