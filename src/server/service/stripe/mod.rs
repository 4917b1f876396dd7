//! Stripe Checkout and webhook handling.
//!
//! Stripe is called over its REST API with the shared `reqwest` client; webhook
//! signatures are verified locally.

use crate::server::config::StripeConfig;

pub mod checkout;
pub mod webhook;

pub struct StripeService<'a> {
    pub http_client: &'a reqwest::Client,
    pub config: &'a StripeConfig,
}

impl<'a> StripeService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a StripeConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }
}
