use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    controller::{
        admin::get_subscriptions,
        auth::{callback, login},
        health::{debug_store, health},
        identity::get_identity,
        stripe::webhook,
        subscription::{get_status, redirect_to_checkout, start_checkout},
    },
    state::AppState,
};

pub fn router(cors_origins: &[String]) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/debug/appwrite", get(debug_store))
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        .route("/identity/{id}", get(get_identity))
        .route("/subscription/status/{discord_id}", get(get_status))
        .route(
            "/subscription/stripe/start",
            get(redirect_to_checkout).post(start_checkout),
        )
        .route("/webhook/stripe", post(webhook::receive))
        .route("/admin/subscriptions", get(get_subscriptions))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Allows credentialed requests from the configured frontend origins.
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
