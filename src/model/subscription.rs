use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct SubscriptionStatusDto {
    pub plan: String,
    pub expires_at: String,
}

/// Row of the admin subscription listing.
#[derive(Serialize, Deserialize)]
pub struct SubscriptionDto {
    pub discord_id: String,
    pub plan: String,
    pub expires_at: String,
}

#[derive(Serialize, Deserialize)]
pub struct CheckoutRequestDto {
    pub discord_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_url: String,
}

#[derive(Serialize, Deserialize)]
pub struct WebhookAckDto {
    pub status: String,
}
