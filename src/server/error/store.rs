use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::PersistenceErrorDto, server::error::config::ConfigError};

/// Outcome of a failed document store call.
///
/// Callers switch on the variant instead of inspecting status codes, in particular the
/// upsert path which only falls back to an update on `Conflict`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document with the requested id already exists.
    #[error("Document already exists")]
    Conflict,

    /// No document with the requested id exists.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The store answered with any other non-success status.
    #[error("{message}")]
    Rejected {
        /// HTTP status returned by the store
        status: u16,
        /// Message returned by the store
        message: String,
        /// Machine readable error type, when the store provides one
        kind: Option<String>,
    },

    /// The store could not be reached or returned an unreadable body.
    #[error("Document store request failed: {0}")]
    Transport(String),

    /// The store location is not configured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Which call of the create-then-update sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Create,
    Update,
}

impl WriteStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

/// A document write that the store refused in both the create and update paths.
///
/// Carries enough location detail (endpoint, project, database, collection) for an
/// operator to find the failing collection. The API key is never part of it.
#[derive(Error, Debug)]
#[error("Document store {} failed for '{document_id}' in {database_id}/{collection_id}: {source}", .stage.as_str())]
pub struct PersistenceError {
    pub stage: WriteStage,
    pub document_id: String,
    pub database_id: String,
    pub collection_id: String,
    pub endpoint: Option<String>,
    pub project: Option<String>,
    #[source]
    pub source: StoreError,
}

/// Converts persistence errors into 500 responses with store diagnostics attached.
impl IntoResponse for PersistenceError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let (store_code, store_type) = match &self.source {
            StoreError::Rejected { status, kind, .. } => (Some(*status), kind.clone()),
            StoreError::Conflict => (Some(409), None),
            StoreError::NotFound(_) => (Some(404), None),
            _ => (None, None),
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(PersistenceErrorDto {
                error: format!("Document store {} failed", self.stage.as_str()),
                detail: self.source.to_string(),
                store_code,
                store_type,
                endpoint: self.endpoint,
                project: self.project,
                database_id: self.database_id,
                collection_id: self.collection_id,
            }),
        )
            .into_response()
    }
}
