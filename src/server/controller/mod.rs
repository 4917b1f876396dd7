//! HTTP request handlers.
//!
//! Controllers extract request data, call into the service layer and convert the
//! resulting domain models to DTOs. Failures are returned as `AppError` and rendered by
//! its `IntoResponse` implementation.

pub mod admin;
pub mod auth;
pub mod health;
pub mod identity;
pub mod stripe;
pub mod subscription;

#[cfg(test)]
mod test;

use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

/// Plain `302 Found` to `location`.
///
/// The OAuth2 flow and the hosted checkout both expect a 302 rather than axum's
/// `Redirect::temporary` (307).
fn found(location: impl Into<String>) -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, location.into())])
}
