//! Document store interface.
//!
//! The application persists everything in an external document database addressed by
//! database, collection and document ids. `DocumentStore` is the seam between the
//! repositories and that service; conflicts and missing documents are reported as
//! explicit `StoreError` variants so callers never inspect raw status codes.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::server::error::store::{PersistenceError, StoreError, WriteStage};

/// Location of a collection inside the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRef {
    pub database_id: String,
    pub collection_id: String,
}

impl CollectionRef {
    pub fn new(database_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            collection_id: collection_id.into(),
        }
    }
}

/// A stored document with store metadata stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

/// Where the store lives, reported with write failures for operator debugging.
///
/// Never contains credentials.
#[derive(Debug, Clone, Default)]
pub struct StoreLocation {
    pub endpoint: Option<String>,
    pub project: Option<String>,
}

/// Which path an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No document existed; a new one was created.
    Created,
    /// A document already existed and was overwritten.
    Updated,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a document with a caller-chosen id.
    ///
    /// # Returns
    /// - `Ok(Document)` - The created document
    /// - `Err(StoreError::Conflict)` - A document with this id already exists
    /// - `Err(StoreError)` - Any other failure
    async fn create(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Document, StoreError>;

    /// Overwrites the data of an existing document.
    ///
    /// # Returns
    /// - `Ok(Document)` - The updated document
    /// - `Err(StoreError::NotFound)` - No document with this id
    /// - `Err(StoreError)` - Any other failure
    async fn update(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Document, StoreError>;

    /// Fetches a single document.
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document
    /// - `Err(StoreError::NotFound)` - No document with this id
    /// - `Err(StoreError)` - Any other failure
    async fn get(&self, collection: &CollectionRef, document_id: &str)
        -> Result<Document, StoreError>;

    /// Lists the documents of a collection.
    async fn list(&self, collection: &CollectionRef) -> Result<Vec<Document>, StoreError>;

    /// Checks that the store answers.
    async fn health(&self) -> Result<(), StoreError>;

    /// Endpoint and project the store talks to.
    fn location(&self) -> StoreLocation;
}

/// Creates a document, overwriting it when one with the same id already exists.
///
/// The store client exposes no atomic upsert, so this is a create followed by an update
/// when (and only when) the create reports a conflict. Concurrent first writes for the
/// same id still end with a single document; the last update wins.
///
/// # Arguments
/// - `store` - Document store to write to
/// - `collection` - Target collection
/// - `document_id` - Key of the document
/// - `data` - Full document data, written as-is on both paths
///
/// # Returns
/// - `Ok(UpsertOutcome)` - Which path stored the document
/// - `Err(PersistenceError)` - Create failed with anything but a conflict, or the
///   fallback update failed
pub async fn create_or_update(
    store: &dyn DocumentStore,
    collection: &CollectionRef,
    document_id: &str,
    data: &Map<String, Value>,
) -> Result<UpsertOutcome, PersistenceError> {
    let failure = |stage: WriteStage, source: StoreError| {
        let location = store.location();
        PersistenceError {
            stage,
            document_id: document_id.to_string(),
            database_id: collection.database_id.clone(),
            collection_id: collection.collection_id.clone(),
            endpoint: location.endpoint,
            project: location.project,
            source,
        }
    };

    match store.create(collection, document_id, data).await {
        Ok(_) => Ok(UpsertOutcome::Created),
        Err(StoreError::Conflict) => {
            store
                .update(collection, document_id, data)
                .await
                .map_err(|e| failure(WriteStage::Update, e))?;

            Ok(UpsertOutcome::Updated)
        }
        Err(e) => Err(failure(WriteStage::Create, e)),
    }
}
