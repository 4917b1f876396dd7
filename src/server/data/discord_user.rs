//! Discord identity repository.
//!
//! Stores the profile returned by Discord as a document keyed by the Discord id. Later
//! logins by the same user overwrite the document with the fresh profile.

use crate::server::{
    data::document::{create_or_update, CollectionRef, DocumentStore, UpsertOutcome},
    error::store::{PersistenceError, StoreError},
    model::identity::DiscordIdentity,
};

pub struct DiscordUserRepository<'a> {
    store: &'a dyn DocumentStore,
    collection: &'a CollectionRef,
}

impl<'a> DiscordUserRepository<'a> {
    /// Creates a new DiscordUserRepository instance.
    ///
    /// # Arguments
    /// - `store` - Document store holding the identities
    /// - `collection` - Collection of Discord identity documents
    pub fn new(store: &'a dyn DocumentStore, collection: &'a CollectionRef) -> Self {
        Self { store, collection }
    }

    /// Stores the identity, creating or fully overwriting its document.
    ///
    /// # Returns
    /// - `Ok(UpsertOutcome)` - Whether the document was created or updated
    /// - `Err(PersistenceError)` - The store refused the write
    pub async fn upsert(
        &self,
        identity: &DiscordIdentity,
    ) -> Result<UpsertOutcome, PersistenceError> {
        create_or_update(self.store, self.collection, identity.id(), identity.profile()).await
    }

    /// Finds a stored identity by Discord id.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordIdentity))` - Identity found
    /// - `Ok(None)` - No document for that id
    /// - `Err(StoreError)` - Store failure
    pub async fn find_by_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<DiscordIdentity>, StoreError> {
        match self.store.get(self.collection, discord_id).await {
            Ok(document) => Ok(Some(DiscordIdentity::from_document(document))),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
