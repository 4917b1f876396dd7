//! Appwrite implementation of the document store.
//!
//! Talks to the Appwrite REST API directly with the shared `reqwest` client:
//!
//! - create: `POST   {endpoint}/databases/{db}/collections/{col}/documents`
//! - update: `PATCH  {endpoint}/databases/{db}/collections/{col}/documents/{id}`
//! - get:    `GET    {endpoint}/databases/{db}/collections/{col}/documents/{id}`
//! - list:   `GET    {endpoint}/databases/{db}/collections/{col}/documents`
//! - health: `GET    {endpoint}/health/version`
//!
//! Appwrite adds `$`-prefixed metadata (`$id`, `$createdAt`, ...) to every document;
//! it is stripped when documents are read back.
//!
//! Appwrite's update is a partial update: keys left out of the body keep their stored
//! value. `update` therefore reads the stored document first and sends `null` for every
//! stored key missing from the new data, so the write is a full overwrite.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use url::Url;

use crate::server::{
    config::AppwriteConfig,
    data::document::{CollectionRef, Document, DocumentStore, StoreLocation},
    error::{config::ConfigError, store::StoreError},
};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// Error object returned by Appwrite on failed requests.
#[derive(Deserialize)]
struct AppwriteErrorBody {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct DocumentList {
    documents: Vec<Value>,
}

pub struct AppwriteStore {
    http_client: reqwest::Client,
    endpoint: Option<String>,
    project_id: Option<String>,
    api_key: Option<String>,
}

impl AppwriteStore {
    /// Creates a store client for the configured Appwrite project.
    ///
    /// Missing endpoint or project are not an error here; every call reports them as
    /// `StoreError::Config` instead.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client (timeouts configured at startup)
    /// - `config` - Appwrite location and credentials
    pub fn new(http_client: reqwest::Client, config: &AppwriteConfig) -> Self {
        Self {
            http_client,
            endpoint: config.endpoint.clone(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Builds an API URL from the endpoint plus percent-encoded path segments.
    fn url(&self, segments: &[&str]) -> Result<Url, StoreError> {
        ConfigError::require(&[
            ("APPWRITE_ENDPOINT", self.endpoint.is_some()),
            ("APPWRITE_PROJECT_ID", self.project_id.is_some()),
        ])?;
        let endpoint = self.endpoint.as_deref().unwrap_or_default();

        let invalid = |source| ConfigError::InvalidUrl {
            name: "APPWRITE_ENDPOINT",
            source,
        };
        let mut url = Url::parse(endpoint).map_err(invalid)?;
        url.path_segments_mut()
            .map_err(|_| invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn documents_url(
        &self,
        collection: &CollectionRef,
        document_id: Option<&str>,
    ) -> Result<Url, StoreError> {
        let mut segments = vec![
            "databases",
            collection.database_id.as_str(),
            "collections",
            collection.collection_id.as_str(),
            "documents",
        ];
        if let Some(document_id) = document_id {
            segments.push(document_id);
        }
        self.url(&segments)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.http_client.request(method, url);
        if let Some(project_id) = &self.project_id {
            request = request.header(PROJECT_HEADER, project_id);
        }
        if let Some(api_key) = &self.api_key {
            request = request.header(KEY_HEADER, api_key);
        }
        request
    }

    /// Sends a request and classifies the response.
    async fn send(request: RequestBuilder) -> Result<Value, StoreError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let (message, kind) = match serde_json::from_str::<AppwriteErrorBody>(&body) {
            Ok(error) => (error.message, error.kind),
            Err(_) if body.is_empty() => (status.to_string(), None),
            Err(_) => (body, None),
        };

        Err(match status {
            StatusCode::CONFLICT => StoreError::Conflict,
            StatusCode::NOT_FOUND => StoreError::NotFound(message),
            _ => StoreError::Rejected {
                status: status.as_u16(),
                message,
                kind,
            },
        })
    }
}

/// Splits an Appwrite document into its id and user data.
fn parse_document(value: Value) -> Result<Document, StoreError> {
    let Value::Object(fields) = value else {
        return Err(StoreError::Transport(
            "document response is not a JSON object".to_string(),
        ));
    };

    let id = fields
        .get("$id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::Transport("document response has no $id".to_string()))?;

    let data: Map<String, Value> = fields
        .into_iter()
        .filter(|(key, _)| !key.starts_with('$'))
        .collect();

    Ok(Document { id, data })
}

/// Update body replacing `stored` with `data`; dropped keys are cleared with `null`.
fn overwrite(stored: &Map<String, Value>, data: &Map<String, Value>) -> Map<String, Value> {
    let mut body = data.clone();
    for key in stored.keys() {
        if !body.contains_key(key) {
            body.insert(key.clone(), Value::Null);
        }
    }
    body
}

#[async_trait]
impl DocumentStore for AppwriteStore {
    async fn create(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let url = self.documents_url(collection, None)?;
        let request = self
            .request(Method::POST, url)
            .json(&json!({ "documentId": document_id, "data": data }));

        parse_document(Self::send(request).await?)
    }

    async fn update(
        &self,
        collection: &CollectionRef,
        document_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Document, StoreError> {
        let url = self.documents_url(collection, Some(document_id))?;
        let stored = parse_document(Self::send(self.request(Method::GET, url.clone())).await?)?;
        let request = self
            .request(Method::PATCH, url)
            .json(&json!({ "data": overwrite(&stored.data, data) }));

        parse_document(Self::send(request).await?)
    }

    async fn get(
        &self,
        collection: &CollectionRef,
        document_id: &str,
    ) -> Result<Document, StoreError> {
        let url = self.documents_url(collection, Some(document_id))?;

        parse_document(Self::send(self.request(Method::GET, url)).await?)
    }

    async fn list(&self, collection: &CollectionRef) -> Result<Vec<Document>, StoreError> {
        let url = self.documents_url(collection, None)?;
        let body = Self::send(self.request(Method::GET, url)).await?;

        let list: DocumentList = serde_json::from_value(body)
            .map_err(|e| StoreError::Transport(format!("unreadable document list: {e}")))?;

        list.documents.into_iter().map(parse_document).collect()
    }

    async fn health(&self) -> Result<(), StoreError> {
        let url = self.url(&["health", "version"])?;
        Self::send(self.request(Method::GET, url)).await?;
        Ok(())
    }

    fn location(&self) -> StoreLocation {
        StoreLocation {
            endpoint: self.endpoint.clone(),
            project: self.project_id.clone(),
        }
    }
}
