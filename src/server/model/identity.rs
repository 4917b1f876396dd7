//! Discord identity domain model.
//!
//! The profile returned by Discord's `/users/@me` endpoint is kept as an opaque JSON
//! object; the only field the application relies on is `id`, which becomes the key of
//! the stored document.

use serde_json::{Map, Value};

use crate::{
    model::identity::IdentityLookupDto,
    server::{data::document::Document, error::auth::AuthError},
};

/// Discord user profile keyed by the Discord account id.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordIdentity {
    id: String,
    profile: Map<String, Value>,
}

impl DiscordIdentity {
    /// Validates a profile returned by Discord.
    ///
    /// Discord sends the id as a string snowflake; numeric ids are accepted and rendered
    /// as strings.
    ///
    /// # Arguments
    /// - `profile` - JSON body of the profile response
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - Profile with a usable id
    /// - `Err(AuthError::ProfileFetch)` - Body is not an object or has no usable `id`
    pub fn from_profile(profile: Value) -> Result<Self, AuthError> {
        let Value::Object(profile) = profile else {
            return Err(AuthError::ProfileFetch(
                "profile response is not a JSON object".to_string(),
            ));
        };

        let id = match profile.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(AuthError::ProfileFetch(
                    "profile response has no id".to_string(),
                ))
            }
        };

        Ok(Self { id, profile })
    }

    /// Converts a stored document back into an identity at the repository boundary.
    pub fn from_document(document: Document) -> Self {
        Self {
            id: document.id,
            profile: document.data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &Map<String, Value> {
        &self.profile
    }

    /// Converts the identity to the lookup DTO returned by the inspection endpoint.
    pub fn into_dto(self) -> IdentityLookupDto {
        IdentityLookupDto {
            found: true,
            document: Some(self.profile),
            error: None,
            store_code: None,
            store_type: None,
        }
    }
}
