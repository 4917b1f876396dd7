use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::subscription::WebhookAckDto,
    server::{
        error::AppError,
        service::{stripe::StripeService, subscription::SubscriptionService},
        state::AppState,
    },
};

const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Receives Stripe event deliveries.
///
/// A completed checkout grants the premium plan to the Discord user referenced by the
/// session. Failing to store the plan answers 500 so that Stripe redelivers the event.
pub async fn receive(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let stripe_service = StripeService::new(&state.http_client, &state.config.stripe);
    let subscription_service =
        SubscriptionService::new(state.store.as_ref(), &state.config.appwrite);

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());
    let now = Utc::now();

    let event = stripe_service.verify_webhook(&body, signature, now)?;

    match event.completed_checkout_reference() {
        Some(discord_id) => {
            subscription_service.grant_premium(&discord_id, now).await?;
        }
        None => {
            tracing::debug!(event_id = %event.id, kind = %event.kind, "Ignoring Stripe event");
        }
    }

    Ok((
        StatusCode::OK,
        Json(WebhookAckDto {
            status: "ok".to_string(),
        }),
    ))
}
