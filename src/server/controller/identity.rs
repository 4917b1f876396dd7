use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::identity::IdentityLookupDto,
    server::{
        error::{store::StoreError, AppError},
        service::identity::IdentityService,
        state::AppState,
    },
};

/// Returns the stored Discord profile for `id`.
///
/// Unknown ids and reads the store refuses answer 404 with `{"found": false, "error": ...}`
/// rather than the plain error body, so the shape of the response tells whether a
/// document could be read. A refusal also carries the store's status and error type.
/// Unreachable or unconfigured stores are still server errors.
pub async fn get_identity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let identity_service = IdentityService::new(state.store.as_ref(), &state.config.appwrite);

    let (error, store_code, store_type) = match identity_service.get_by_id(&id).await {
        Ok(identity) => return Ok((StatusCode::OK, Json(identity.into_dto())).into_response()),
        Err(StoreError::NotFound(error)) => (error, None, None),
        Err(StoreError::Rejected {
            status,
            message,
            kind,
        }) => {
            tracing::warn!(discord_id = %id, status, "Document store refused identity lookup: {message}");
            (message, Some(status), kind)
        }
        Err(e) => return Err(e.into()),
    };

    Ok((
        StatusCode::NOT_FOUND,
        Json(IdentityLookupDto {
            found: false,
            document: None,
            error: Some(error),
            store_code,
            store_type,
        }),
    )
        .into_response())
}
