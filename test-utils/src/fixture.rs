//! JSON payloads and signatures shared by tests.

use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Webhook signing secret the tests configure as `STRIPE_WEBHOOK_SECRET`.
pub const STRIPE_WEBHOOK_SECRET: &str = "whsec_test_recruitbot";

/// Discord `/users/@me` profile with the fields Discord returns for the
/// `identify email` scopes.
pub fn discord_profile(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "global_name": username,
        "discriminator": "0",
        "avatar": null,
        "email": format!("{username}@example.com"),
        "verified": true,
        "locale": "ja"
    })
}

/// Stripe `checkout.session.completed` event for a checkout started by `discord_id`.
pub fn checkout_completed_event(discord_id: &str) -> Value {
    json!({
        "id": "evt_test_checkout",
        "object": "event",
        "type": "checkout.session.completed",
        "data": {
            "object": {
                "id": "cs_test_a1b2c3",
                "object": "checkout.session",
                "mode": "subscription",
                "client_reference_id": discord_id
            }
        }
    })
}

/// Stripe event of a type the backend ignores.
pub fn unrelated_event() -> Value {
    json!({
        "id": "evt_test_invoice",
        "object": "event",
        "type": "invoice.paid",
        "data": { "object": { "id": "in_test" } }
    })
}

/// Builds a `Stripe-Signature` header value the way Stripe signs webhook deliveries.
pub fn stripe_signature(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let signature = hex::encode(mac.finalize().into_bytes());

    format!("t={timestamp},v1={signature}")
}
