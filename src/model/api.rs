use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when the document store refuses a write.
#[derive(Serialize, Deserialize)]
pub struct PersistenceErrorDto {
    pub error: String,
    pub detail: String,
    pub store_code: Option<u16>,
    pub store_type: Option<String>,
    pub endpoint: Option<String>,
    pub project: Option<String>,
    pub database_id: String,
    pub collection_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}

/// Sanitized view of the document store configuration.
#[derive(Serialize, Deserialize)]
pub struct StoreDebugDto {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub db_users_id: String,
    pub collection_discord_id: String,
    pub api_key_masked: Option<String>,
    pub health_ok: bool,
    pub health_error: Option<String>,
}
