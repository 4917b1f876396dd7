//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Immutable configuration resolved from the environment
//! - HTTP client for Discord and Stripe requests
//! - Signer for the OAuth2 `state` parameter
//! - Document store client for persistence

use std::sync::Arc;

use oauth2::{basic::BasicClient, EndpointNotSet, EndpointSet};

use crate::server::{
    config::Config, data::document::DocumentStore,
    service::oauth::state_token::StateTokenSigner,
};

/// Type alias for the OAuth2 client configured for Discord authentication.
///
/// Authorize and token endpoints are set; device authorization, introspection and
/// revocation are not used.
pub(crate) type OAuth2Client =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<Config>` and `Arc<dyn DocumentStore>` are reference-counted pointers
/// - `reqwest::Client` uses an `Arc` internally
/// - `StateTokenSigner` shares its secret through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Settings resolved at startup; never mutated afterwards.
    pub config: Arc<Config>,

    /// HTTP client for Discord and Stripe API requests.
    ///
    /// Configured with no redirects and the request timeout from the configuration.
    pub http_client: reqwest::Client,

    /// Signs and verifies the OAuth2 `state` parameter.
    pub signer: StateTokenSigner,

    /// Client for the document database holding identities and plans.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config` - Resolved configuration; the state signer is keyed from it
    /// - `http_client` - HTTP client for external API requests
    /// - `store` - Document store client
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(config: Config, http_client: reqwest::Client, store: Arc<dyn DocumentStore>) -> Self {
        let signer = StateTokenSigner::new(&config.state_secret);

        Self {
            config: Arc::new(config),
            http_client,
            signer,
            store,
        }
    }
}
