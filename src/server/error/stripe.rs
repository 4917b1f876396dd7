use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StripeError {
    /// Stripe answered an API call with an error.
    ///
    /// Results in a 502 Bad Gateway carrying Stripe's own message, which never contains
    /// the secret key.
    #[error("Stripe API error ({status}): {message}")]
    Api {
        /// HTTP status returned by Stripe
        status: u16,
        /// Message from Stripe's error object
        message: String,
    },

    /// Webhook request carried no `Stripe-Signature` header.
    ///
    /// Results in a 400 Bad Request.
    #[error("Missing Stripe-Signature header")]
    MissingSignature,

    /// Webhook signature did not verify or its timestamp is outside the tolerance.
    ///
    /// Results in a 400 Bad Request.
    #[error("Invalid Stripe webhook signature")]
    InvalidSignature,

    /// Webhook body is not a Stripe event.
    ///
    /// Results in a 400 Bad Request.
    #[error("Invalid Stripe event payload: {0}")]
    InvalidPayload(String),
}

impl IntoResponse for StripeError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Api { .. } => {
                tracing::warn!("{}", self);
                StatusCode::BAD_GATEWAY
            }
            Self::MissingSignature | Self::InvalidSignature | Self::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
