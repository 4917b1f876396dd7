use serde::Deserialize;

use crate::server::{
    error::{config::ConfigError, stripe::StripeError, AppError},
    service::stripe::StripeService,
};

#[derive(Deserialize)]
struct CheckoutSession {
    url: Option<String>,
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorObject,
}

#[derive(Deserialize)]
struct StripeErrorObject {
    message: Option<String>,
}

impl StripeService<'_> {
    /// Creates a subscription Checkout session for a Discord user.
    ///
    /// The Discord id is passed as `client_reference_id` so the completion webhook can
    /// find the user again.
    ///
    /// # Arguments
    /// - `discord_id` - Discord account the subscription is for
    ///
    /// # Returns
    /// - `Ok(String)` - URL of the hosted checkout page
    /// - `Err(AppError::ConfigErr)` - Stripe key, price or redirect URLs not configured
    /// - `Err(StripeError::Api)` - Stripe rejected the request
    /// - `Err(AppError::Transport)` - Stripe could not be reached
    pub async fn create_checkout_session(&self, discord_id: &str) -> Result<String, AppError> {
        ConfigError::require(&[
            ("STRIPE_API_KEY", self.config.api_key.is_some()),
            ("STRIPE_PRICE_ID", self.config.price_id.is_some()),
            ("STRIPE_SUCCESS_URL", self.config.success_url.is_some()),
            ("STRIPE_CANCEL_URL", self.config.cancel_url.is_some()),
        ])?;
        let api_key = self.config.api_key.as_deref().unwrap_or_default();
        let price_id = self.config.price_id.as_deref().unwrap_or_default();
        let success_url = self.config.success_url.as_deref().unwrap_or_default();
        let cancel_url = self.config.cancel_url.as_deref().unwrap_or_default();

        let success_url = format!("{success_url}?session_id={{CHECKOUT_SESSION_ID}}");
        let form = [
            ("mode", "subscription"),
            ("payment_method_types[0]", "card"),
            ("line_items[0][price]", price_id),
            ("line_items[0][quantity]", "1"),
            ("success_url", success_url.as_str()),
            ("cancel_url", cancel_url),
            ("client_reference_id", discord_id),
        ];

        let url = format!("{}/checkout/sessions", self.config.api_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(url)
            .bearer_auth(api_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::transport("Stripe", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| status.to_string());

            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let session = response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| AppError::transport("Stripe", e))?;

        session.url.ok_or_else(|| {
            StripeError::Api {
                status: status.as_u16(),
                message: "checkout session has no url".to_string(),
            }
            .into()
        })
    }
}
