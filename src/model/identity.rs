use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of looking up a stored Discord identity.
#[derive(Serialize, Deserialize)]
pub struct IdentityLookupDto {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status of the store when it refused the read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_type: Option<String>,
}
