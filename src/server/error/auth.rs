use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The OAuth callback arrived without an authorization code.
    ///
    /// Happens when the user denies consent or the callback URL was requested directly.
    /// Results in a 400 Bad Request response.
    #[error("Authorization code missing from callback")]
    MissingCode,

    /// The signed `state` parameter failed verification.
    ///
    /// The callback does not correspond to a login this server started, indicating a
    /// forged or tampered request. Checked before any call to Discord. Results in a
    /// 400 Bad Request response.
    #[error("Invalid OAuth state parameter")]
    InvalidState,

    /// Discord rejected the authorization code exchange.
    ///
    /// Carries the provider's error text so the user can be told to restart the login.
    /// Results in a 400 Bad Request response.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Discord rejected the profile request or returned an unusable profile.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Failed to fetch Discord profile: {0}")]
    ProfileFetch(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is caused by the client or the provider rejecting the flow, so all map
/// to 400 Bad Request. The message includes the provider detail but never credentials.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
