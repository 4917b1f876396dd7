//! Stripe webhook event model.
//!
//! Only the fields the webhook handler reads are modeled; the event object is kept as
//! raw JSON because its shape depends on the event type.

use serde::Deserialize;
use serde_json::Value;

pub const CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";

#[derive(Debug, Deserialize)]
pub struct StripeEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: Value,
}

impl StripeEvent {
    /// Discord id attached to a completed checkout session.
    ///
    /// # Returns
    /// - `Some(String)` - The event is `checkout.session.completed` and carries a
    ///   non-empty `client_reference_id`
    /// - `None` - Any other event, or a session without reference
    pub fn completed_checkout_reference(&self) -> Option<String> {
        if self.kind != CHECKOUT_SESSION_COMPLETED {
            return None;
        }

        self.data
            .object
            .get("client_reference_id")
            .and_then(Value::as_str)
            .filter(|reference| !reference.is_empty())
            .map(str::to_string)
    }
}
