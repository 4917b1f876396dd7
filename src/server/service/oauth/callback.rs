use oauth2::{
    basic::BasicErrorResponse, AuthorizationCode, HttpClientError, RequestTokenError,
    TokenResponse,
};
use reqwest::StatusCode;
use serde_json::Value;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::identity::DiscordIdentity,
    service::oauth::DiscordAuthService,
};

/// Longest slice of a provider response body quoted in an error.
const MAX_ERROR_BODY: usize = 200;

impl DiscordAuthService<'_> {
    /// Completes the login started by `login_url`.
    ///
    /// The state is verified before anything else; a forged callback never reaches
    /// Discord. Nothing is persisted here.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback query
    /// - `state` - State from the callback query
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - Profile of the user who logged in
    /// - `Err(AuthError::MissingCode)` - No code in the callback
    /// - `Err(AuthError::InvalidState)` - State missing or not signed by this server
    /// - `Err(AuthError::TokenExchange)` - Discord rejected the code
    /// - `Err(AuthError::ProfileFetch)` - Discord rejected the profile request
    /// - `Err(AppError::ConfigErr)` - Discord credentials not configured
    /// - `Err(AppError::Transport)` - Discord could not be reached
    pub async fn callback(
        &self,
        code: Option<&str>,
        state: Option<&str>,
    ) -> Result<DiscordIdentity, AppError> {
        let code = code
            .filter(|code| !code.is_empty())
            .ok_or(AuthError::MissingCode)?;

        if !self.signer.verify(state.unwrap_or_default()) {
            tracing::warn!("Rejected OAuth callback with an invalid state");
            return Err(AuthError::InvalidState.into());
        }

        let oauth_client = self.oauth_client(true)?;

        let token = oauth_client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(self.http_client)
            .await
            .map_err(token_error)?;

        self.fetch_discord_user(token.access_token().secret()).await
    }

    /// Retrieves the profile of the user owning `access_token`.
    async fn fetch_discord_user(&self, access_token: &str) -> Result<DiscordIdentity, AppError> {
        let url = format!("{}/users/@me", self.config.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::transport("Discord", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Discord rejected the profile request with {}", status);
            return Err(AuthError::ProfileFetch(format!(
                "Discord answered {status}: {}",
                truncate(&body)
            ))
            .into());
        }

        let profile = response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                AppError::from(AuthError::ProfileFetch(e.to_string()))
            } else {
                AppError::transport("Discord", e)
            }
        })?;

        Ok(DiscordIdentity::from_profile(profile)?)
    }
}

/// Splits token exchange failures into provider rejections and transport faults.
fn token_error(
    err: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>,
) -> AppError {
    match err {
        RequestTokenError::Request(e) => AppError::transport("Discord", e),
        RequestTokenError::ServerResponse(response) => {
            tracing::warn!("Discord rejected the authorization code: {}", response);
            AuthError::TokenExchange(response.to_string()).into()
        }
        RequestTokenError::Parse(e, body) => AuthError::TokenExchange(format!(
            "{e}: {}",
            truncate(&String::from_utf8_lossy(&body))
        ))
        .into(),
        RequestTokenError::Other(message) => AuthError::TokenExchange(message).into(),
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}
