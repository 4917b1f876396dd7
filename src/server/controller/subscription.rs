use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::subscription::{CheckoutDto, CheckoutRequestDto},
    server::{
        controller::found,
        error::AppError,
        service::{stripe::StripeService, subscription::SubscriptionService},
        state::AppState,
    },
};

/// Current plan of a Discord user.
pub async fn get_status(
    State(state): State<AppState>,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let subscription_service =
        SubscriptionService::new(state.store.as_ref(), &state.config.appwrite);

    let subscription = subscription_service.status(&discord_id).await?;

    Ok((StatusCode::OK, Json(subscription.into_status_dto())))
}

/// Creates a Stripe Checkout session and returns its URL.
pub async fn start_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let discord_id = required_discord_id(payload.discord_id)?;
    let stripe_service = StripeService::new(&state.http_client, &state.config.stripe);

    let checkout_url = stripe_service.create_checkout_session(&discord_id).await?;

    Ok((StatusCode::OK, Json(CheckoutDto { checkout_url })))
}

/// Creates a Stripe Checkout session and redirects the browser to it.
pub async fn redirect_to_checkout(
    State(state): State<AppState>,
    Query(params): Query<CheckoutRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let discord_id = required_discord_id(params.discord_id)?;
    let stripe_service = StripeService::new(&state.http_client, &state.config.stripe);

    let checkout_url = stripe_service.create_checkout_session(&discord_id).await?;

    Ok(found(checkout_url))
}

fn required_discord_id(discord_id: Option<String>) -> Result<String, AppError> {
    discord_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("discord_id is required".to_string()))
}
