//! Subscription domain models and parameters.
//!
//! Subscriptions are stored as one document per Discord id in the plans collection.
//! Documents written by earlier deployments carry naive ISO timestamps, so parsing is
//! lenient on read while writes always use RFC 3339 UTC.

use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

use crate::{
    model::subscription::{SubscriptionDto, SubscriptionStatusDto},
    server::{
        data::document::Document,
        error::{internal::InternalError, AppError},
        util::parse::parse_timestamp,
    },
};

/// Plan granted by a completed Stripe checkout.
pub const PREMIUM_PLAN: &str = "premium";

/// Length of a subscription period granted per checkout.
pub const SUBSCRIPTION_PERIOD_DAYS: i64 = 30;

/// Subscription plan held by a Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub discord_id: String,
    pub plan: String,
    pub expires_at: DateTime<Utc>,
}

impl Subscription {
    /// Converts a stored plan document into a subscription.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - Parsed subscription
    /// - `Err(AppError::InternalErr)` - Document missing `plan`/`expires_at` or the timestamp
    ///   is malformed
    pub fn from_document(document: Document) -> Result<Self, AppError> {
        let plan = string_field(&document, "plan")?;
        let expires_at = parse_timestamp(&string_field(&document, "expires_at")?)?;
        let discord_id = document
            .data
            .get("discord_id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(document.id);

        Ok(Self {
            discord_id,
            plan,
            expires_at,
        })
    }

    pub fn into_status_dto(self) -> SubscriptionStatusDto {
        SubscriptionStatusDto {
            plan: self.plan,
            expires_at: self.expires_at.to_rfc3339(),
        }
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            discord_id: self.discord_id,
            plan: self.plan,
            expires_at: self.expires_at.to_rfc3339(),
        }
    }
}

fn string_field(document: &Document, field: &'static str) -> Result<String, InternalError> {
    document
        .data
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| InternalError::MissingField {
            document_id: document.id.clone(),
            field,
        })
}

/// Parameters for writing a subscription document.
#[derive(Debug, Clone)]
pub struct UpsertSubscriptionParam {
    pub discord_id: String,
    pub plan: String,
    pub expires_at: DateTime<Utc>,
}

impl UpsertSubscriptionParam {
    /// Premium subscription running one period from `now`.
    pub fn premium(discord_id: String, now: DateTime<Utc>) -> Self {
        Self {
            discord_id,
            plan: PREMIUM_PLAN.to_string(),
            expires_at: now + Duration::days(SUBSCRIPTION_PERIOD_DAYS),
        }
    }

    /// Document data written to the plans collection.
    pub fn to_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("discord_id".to_string(), Value::from(self.discord_id.as_str()));
        data.insert("plan".to_string(), Value::from(self.plan.as_str()));
        data.insert("expires_at".to_string(), Value::from(self.expires_at.to_rfc3339()));
        data
    }
}
