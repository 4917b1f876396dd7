//! Subscription plan repository.

use crate::server::{
    data::document::{create_or_update, CollectionRef, Document, DocumentStore, UpsertOutcome},
    error::store::{PersistenceError, StoreError},
    model::subscription::UpsertSubscriptionParam,
};

pub struct SubscriptionRepository<'a> {
    store: &'a dyn DocumentStore,
    collection: &'a CollectionRef,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore, collection: &'a CollectionRef) -> Self {
        Self { store, collection }
    }

    /// Finds the plan document of a Discord user.
    ///
    /// Returns the raw document; conversion to `Subscription` happens in the service so
    /// malformed documents surface as internal errors rather than store errors.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Plan document found
    /// - `Ok(None)` - User has no plan document
    /// - `Err(StoreError)` - Store failure
    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<Document>, StoreError> {
        match self.store.get(self.collection, discord_id).await {
            Ok(document) => Ok(Some(document)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes a plan document keyed by the Discord id, overwriting any previous plan.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Whether the document was created or updated
    /// - `Err(PersistenceError)` - The store refused the write
    pub async fn upsert(
        &self,
        param: &UpsertSubscriptionParam,
    ) -> Result<UpsertOutcome, PersistenceError> {
        create_or_update(
            self.store,
            self.collection,
            &param.discord_id,
            &param.to_data(),
        )
        .await
    }

    /// Lists every plan document.
    pub async fn get_all(&self) -> Result<Vec<Document>, StoreError> {
        self.store.list(self.collection).await
    }
}
