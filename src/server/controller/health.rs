use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::api::{HealthDto, StoreDebugDto},
    server::{state::AppState, util::mask::mask_secret},
};

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }),
    )
}

/// Sanitized view of the document store settings plus a live health probe.
///
/// The API key is only ever shown masked.
pub async fn debug_store(State(state): State<AppState>) -> impl IntoResponse {
    let appwrite = &state.config.appwrite;
    let probe = state.store.health().await;

    (
        StatusCode::OK,
        Json(StoreDebugDto {
            endpoint: appwrite.endpoint.clone(),
            project_id: appwrite.project_id.clone(),
            db_users_id: appwrite.users_database_id.clone(),
            collection_discord_id: appwrite.discord_collection_id.clone(),
            api_key_masked: appwrite.api_key.as_deref().map(mask_secret),
            health_ok: probe.is_ok(),
            health_error: probe.err().map(|e| e.to_string()),
        }),
    )
}
