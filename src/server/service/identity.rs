//! Persistence of Discord identities.

use crate::server::{
    config::AppwriteConfig,
    data::{
        discord_user::DiscordUserRepository,
        document::{CollectionRef, DocumentStore, UpsertOutcome},
    },
    error::{store::StoreError, AppError},
    model::identity::DiscordIdentity,
};

pub struct IdentityService<'a> {
    store: &'a dyn DocumentStore,
    collection: CollectionRef,
}

impl<'a> IdentityService<'a> {
    /// Creates a service writing to the configured users database and Discord collection.
    pub fn new(store: &'a dyn DocumentStore, config: &AppwriteConfig) -> Self {
        Self {
            store,
            collection: CollectionRef::new(
                config.users_database_id.as_str(),
                config.discord_collection_id.as_str(),
            ),
        }
    }

    /// Stores a Discord profile under its id, replacing any previous version.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Whether the document was created or overwritten
    /// - `Err(AppError::PersistenceErr)` - The store refused the write
    /// - `Err(AppError::ConfigErr)` - The store location is not configured
    pub async fn store(&self, identity: &DiscordIdentity) -> Result<UpsertOutcome, AppError> {
        let outcome = DiscordUserRepository::new(self.store, &self.collection)
            .upsert(identity)
            .await?;

        tracing::info!(
            discord_id = identity.id(),
            outcome = ?outcome,
            "Stored Discord identity"
        );

        Ok(outcome)
    }

    /// Reads back a stored Discord profile.
    ///
    /// # Returns
    /// - `Ok(DiscordIdentity)` - The stored profile
    /// - `Err(StoreError::NotFound)` - No identity stored under `discord_id`
    /// - `Err(StoreError)` - The store could not be read
    pub async fn get_by_id(&self, discord_id: &str) -> Result<DiscordIdentity, StoreError> {
        DiscordUserRepository::new(self.store, &self.collection)
            .find_by_id(discord_id)
            .await?
            .ok_or_else(|| {
                StoreError::NotFound(format!("No identity stored for Discord user {discord_id}"))
            })
    }
}
