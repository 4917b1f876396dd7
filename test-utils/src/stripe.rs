//! Mock of the Stripe Checkout API.

use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const CHECKOUT_PATH: &str = "/v1/checkout/sessions";

/// Secret key the tests configure as `STRIPE_API_KEY`.
pub const API_KEY: &str = "sk_test_recruitbot";

pub struct MockStripe {
    server: MockServer,
}

impl MockStripe {
    /// Starts the mock on a random local port with no endpoints mounted.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Answers checkout session creation with a session whose URL is `checkout_url`.
    pub async fn serve_checkout(&self, checkout_url: &str) {
        Mock::given(method("POST"))
            .and(path(CHECKOUT_PATH))
            .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_a1b2c3",
                "object": "checkout.session",
                "mode": "subscription",
                "url": checkout_url
            })))
            .mount(&self.server)
            .await;
    }

    /// Answers checkout session creation with a Stripe error object.
    pub async fn reject_checkout(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(CHECKOUT_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": {
                    "type": "invalid_request_error",
                    "message": message
                }
            })))
            .mount(&self.server)
            .await;
    }

    /// Decoded form bodies of the checkout requests received.
    pub async fn checkout_requests(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == CHECKOUT_PATH)
            .map(|request| {
                url::form_urlencoded::parse(&request.body)
                    .into_owned()
                    .collect()
            })
            .collect()
    }
}
