mod model;
mod server;

use crate::server::{config::Config, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client(&config)?;
    let store = startup::setup_store(&config, &http_client);

    startup::check_configuration(&config, store.as_ref()).await;

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    let router = server::router::router(&config.cors_origins);
    let state = AppState::new(config, http_client, store);

    tracing::info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, router.with_state(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
