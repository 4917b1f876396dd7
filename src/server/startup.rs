use std::{sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    data::{appwrite::AppwriteStore, document::DocumentStore},
    error::AppError,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`; without it this crate and the HTTP trace layer log at
/// `info` and everything else at `warn`.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("{}=info,tower_http=info,warn", env!("CARGO_CRATE_NAME")).into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the HTTP client shared by every outbound call.
///
/// Redirects are never followed so a provider answer can't bounce requests to arbitrary
/// hosts. Every request is bounded by the configured timeout.
///
/// # Arguments
/// - `config` - Application configuration containing the request timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - The TLS backend could not be initialized
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {e}")))
}

/// Creates the document store client.
pub fn setup_store(config: &Config, http_client: &reqwest::Client) -> Arc<dyn DocumentStore> {
    Arc::new(AppwriteStore::new(http_client.clone(), &config.appwrite))
}

/// Reports configuration problems that would otherwise only show up on first use.
///
/// Nothing here stops the server: every check only logs.
pub async fn check_configuration(config: &Config, store: &dyn DocumentStore) {
    if config.uses_default_state_secret() {
        tracing::warn!(
            "OAUTH_STATE_SECRET is not set; login state is signed with the default placeholder"
        );
    }

    match &config.appwrite.project_id {
        Some(project_id) => tracing::info!("Using Appwrite project '{}'", project_id),
        None => tracing::warn!("Appwrite project id is not set; storage endpoints will fail"),
    }

    for (name, present) in [
        ("DISCORD_CLIENT_ID", config.discord.client_id.is_some()),
        ("DISCORD_CLIENT_SECRET", config.discord.client_secret.is_some()),
        ("DISCORD_REDIRECT_URI", config.discord.redirect_url.is_some()),
    ] {
        if !present {
            tracing::warn!("{} is not set; Discord login is unavailable", name);
        }
    }

    match store.health().await {
        Ok(()) => tracing::info!("Document store is reachable"),
        Err(e) => tracing::warn!("Document store health check failed: {}", e),
    }
}

/// Resolves once the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
