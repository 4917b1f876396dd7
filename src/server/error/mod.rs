//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every endpoint answers failures with a JSON `{"error": ...}` body.

pub mod auth;
pub mod config;
pub mod internal;
pub mod store;
pub mod stripe;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError,
        config::ConfigError,
        internal::InternalError,
        store::{PersistenceError, StoreError},
        stripe::StripeError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or a request needing unset settings.
    ///
    /// Always results in 500 Internal Server Error. The response names the missing
    /// variables but never includes configured values.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// OAuth login flow error.
    ///
    /// Delegates to `AuthError::into_response()` (400 Bad Request).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Document write refused by the store.
    ///
    /// Delegates to `PersistenceError::into_response()` (500 with store diagnostics).
    #[error(transparent)]
    PersistenceErr(PersistenceError),

    /// Stripe API or webhook error.
    ///
    /// Delegates to `StripeError::into_response()`.
    #[error(transparent)]
    StripeErr(#[from] StripeError),

    /// Unexpected data or codebase issue.
    ///
    /// Results in 500 Internal Server Error with a generic message.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Network-level failure talking to an external service.
    ///
    /// Results in 500 Internal Server Error. Safe for the user to retry the whole flow.
    ///
    /// # Fields
    /// - `service` - Name of the service that could not be reached
    /// - `message` - Description of the failure
    #[error("Failed to reach {service}: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds a transport error for a failed request to `service`.
    pub fn transport(service: &'static str, err: impl std::fmt::Display) -> Self {
        AppError::Transport {
            service,
            message: err.to_string(),
        }
    }
}

/// Lifts an unconfigured store out of the write failure so it is reported as a
/// configuration problem rather than a rejected write.
impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        match err.source {
            StoreError::Config(config) => AppError::ConfigErr(config),
            source => AppError::PersistenceErr(PersistenceError { source, ..err }),
        }
    }
}

/// Maps document store failures outside of the write path.
///
/// Writes go through `PersistenceError` instead so the response carries the
/// collection location.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Transport(msg) => AppError::Transport {
                service: "document store",
                message: msg,
            },
            StoreError::Config(err) => AppError::ConfigErr(err),
            err @ (StoreError::Conflict | StoreError::Rejected { .. }) => {
                AppError::InternalError(format!("Document store error: {err}"))
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Domain errors delegate to their own response handling, while other errors use
/// standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `AuthErr`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For configuration, transport, persistence and internal errors
/// - Variable - For `StripeErr`, delegated to `StripeError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::PersistenceErr(err) => err.into_response(),
            Self::StripeErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ConfigErr(err) => {
                tracing::error!("Configuration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: format!("Server configuration incomplete: {err}"),
                    }),
                )
                    .into_response()
            }
            err @ Self::Transport { .. } => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
