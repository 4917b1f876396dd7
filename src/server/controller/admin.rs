use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::subscription::SubscriptionDto,
    server::{error::AppError, service::subscription::SubscriptionService, state::AppState},
};

/// Every stored plan.
// TODO: put behind admin authentication once the dashboard has a login.
pub async fn get_subscriptions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let subscription_service =
        SubscriptionService::new(state.store.as_ref(), &state.config.appwrite);

    let subscriptions: Vec<SubscriptionDto> = subscription_service
        .get_all()
        .await?
        .into_iter()
        .map(|subscription| subscription.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(subscriptions)))
}
