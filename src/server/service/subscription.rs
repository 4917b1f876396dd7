//! Subscription plans keyed by Discord id.

use chrono::{DateTime, Utc};

use crate::server::{
    config::AppwriteConfig,
    data::{
        document::{CollectionRef, DocumentStore},
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::subscription::{Subscription, UpsertSubscriptionParam},
};

pub struct SubscriptionService<'a> {
    store: &'a dyn DocumentStore,
    collection: CollectionRef,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(store: &'a dyn DocumentStore, config: &AppwriteConfig) -> Self {
        Self {
            store,
            collection: CollectionRef::new(
                config.subscriptions_database_id.as_str(),
                config.plans_collection_id.as_str(),
            ),
        }
    }

    fn repository(&self) -> SubscriptionRepository<'_> {
        SubscriptionRepository::new(self.store, &self.collection)
    }

    /// Gets the plan of a Discord user.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The stored plan, expired or not
    /// - `Err(AppError::NotFound)` - No plan stored for `discord_id`
    /// - `Err(AppError::InternalErr)` - The stored plan is malformed
    pub async fn status(&self, discord_id: &str) -> Result<Subscription, AppError> {
        let document = self
            .repository()
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No subscription found for Discord user {discord_id}"))
            })?;

        Subscription::from_document(document)
    }

    /// Grants the premium plan for a full period starting at `now`.
    ///
    /// An existing plan is overwritten, so a renewal restarts the period.
    pub async fn grant_premium(
        &self,
        discord_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Subscription, AppError> {
        let param = UpsertSubscriptionParam::premium(discord_id.to_string(), now);
        let outcome = self.repository().upsert(&param).await?;

        tracing::info!(
            discord_id,
            plan = param.plan.as_str(),
            expires_at = %param.expires_at,
            outcome = ?outcome,
            "Granted subscription"
        );

        Ok(Subscription {
            discord_id: param.discord_id,
            plan: param.plan,
            expires_at: param.expires_at,
        })
    }

    /// Lists every stored plan.
    pub async fn get_all(&self) -> Result<Vec<Subscription>, AppError> {
        self.repository()
            .get_all()
            .await?
            .into_iter()
            .map(Subscription::from_document)
            .collect()
    }
}
