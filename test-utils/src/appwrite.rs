//! Stateful fake of the Appwrite documents API.
//!
//! Documents live in memory keyed by database, collection and document id. Creates of an
//! existing id answer `409`, updates and reads of a missing id answer `404`, matching the
//! status codes Appwrite uses. Updates are partial like Appwrite's: sent keys are merged
//! into the stored data and keys left out keep their value.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use serde_json::{json, Map, Value};
use wiremock::{
    matchers::{header, method, path, path_regex},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};

/// Project id the fake expects in the `X-Appwrite-Project` header.
pub const PROJECT_ID: &str = "test-project";

/// API key the tests configure; never expected in any response body.
pub const API_KEY: &str = "test-appwrite-api-key";

type DocumentKey = (String, String, String);

#[derive(Default)]
struct FakeState {
    documents: BTreeMap<DocumentKey, Map<String, Value>>,
    create_calls: usize,
    update_calls: usize,
    reject_creates: Option<u16>,
    reject_updates: Option<u16>,
    reject_reads: Option<u16>,
}

pub struct FakeAppwrite {
    server: MockServer,
    state: Arc<Mutex<FakeState>>,
}

impl FakeAppwrite {
    /// Starts the fake on a random local port.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state = Arc::new(Mutex::new(FakeState::default()));

        Mock::given(method("GET"))
            .and(path("/v1/health/version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.6.0"})))
            .mount(&server)
            .await;

        Mock::given(path_regex(
            r"^/v1/databases/[^/]+/collections/[^/]+/documents(/[^/]+)?$",
        ))
        .and(header("X-Appwrite-Project", PROJECT_ID))
        .respond_with(DocumentsResponder {
            state: state.clone(),
        })
        .mount(&server)
        .await;

        Self { server, state }
    }

    /// Endpoint to configure as `APPWRITE_ENDPOINT`.
    pub fn endpoint(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Data of a stored document, without metadata.
    pub fn document(&self, database_id: &str, collection_id: &str, document_id: &str) -> Option<Value> {
        let state = self.state.lock().unwrap();
        state
            .documents
            .get(&key(database_id, collection_id, document_id))
            .cloned()
            .map(Value::Object)
    }

    /// Number of documents stored in a collection.
    pub fn document_count(&self, database_id: &str, collection_id: &str) -> usize {
        let state = self.state.lock().unwrap();
        state
            .documents
            .keys()
            .filter(|(db, col, _)| db == database_id && col == collection_id)
            .count()
    }

    /// Seeds a document directly, bypassing the API and the call counters.
    pub fn insert(&self, database_id: &str, collection_id: &str, document_id: &str, data: Value) {
        let Value::Object(data) = data else {
            panic!("seeded document data must be a JSON object")
        };
        let mut state = self.state.lock().unwrap();
        state
            .documents
            .insert(key(database_id, collection_id, document_id), data);
    }

    /// Number of create requests received.
    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    /// Number of update requests received.
    pub fn update_calls(&self) -> usize {
        self.state.lock().unwrap().update_calls
    }

    /// Makes every following create answer with `status`.
    pub fn reject_creates(&self, status: u16) {
        self.state.lock().unwrap().reject_creates = Some(status);
    }

    /// Makes every following update answer with `status`.
    pub fn reject_updates(&self, status: u16) {
        self.state.lock().unwrap().reject_updates = Some(status);
    }

    /// Makes every following document or list read answer with `status`.
    pub fn reject_reads(&self, status: u16) {
        self.state.lock().unwrap().reject_reads = Some(status);
    }
}

fn key(database_id: &str, collection_id: &str, document_id: &str) -> DocumentKey {
    (
        database_id.to_string(),
        collection_id.to_string(),
        document_id.to_string(),
    )
}

fn error_response(status: u16, message: &str, kind: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "message": message,
        "code": status,
        "type": kind,
        "version": "1.6.0"
    }))
}

fn document_body(key: &DocumentKey, data: &Map<String, Value>) -> Value {
    let mut body = data.clone();
    body.insert("$id".to_string(), Value::from(key.2.as_str()));
    body.insert("$databaseId".to_string(), Value::from(key.0.as_str()));
    body.insert("$collectionId".to_string(), Value::from(key.1.as_str()));
    body.insert(
        "$createdAt".to_string(),
        Value::from("2026-10-19T00:00:00.000+00:00"),
    );
    Value::Object(body)
}

struct DocumentsResponder {
    state: Arc<Mutex<FakeState>>,
}

impl Respond for DocumentsResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        // /v1/databases/{db}/collections/{col}/documents[/{id}]
        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|segments| segments.map(str::to_string).collect())
            .unwrap_or_default();
        let (database_id, collection_id) = (segments[2].clone(), segments[4].clone());
        let document_id = segments.get(6).cloned();

        let mut state = self.state.lock().unwrap();

        if let (Some(status), "GET") = (state.reject_reads, request.method.as_str()) {
            return error_response(
                status,
                "The current user is not authorized to perform the requested action.",
                "user_unauthorized",
            );
        }

        match (request.method.as_str(), document_id) {
            ("POST", None) => {
                state.create_calls += 1;
                if let Some(status) = state.reject_creates {
                    return error_response(status, "Forced create failure", "general_server_error");
                }

                let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
                let (Some(document_id), Some(Value::Object(data))) =
                    (body["documentId"].as_str(), body.get("data").cloned())
                else {
                    return error_response(400, "Invalid document structure", "document_invalid_structure");
                };

                let key = key(&database_id, &collection_id, document_id);
                if state.documents.contains_key(&key) {
                    return error_response(
                        409,
                        "Document with the requested ID already exists.",
                        "document_already_exists",
                    );
                }

                let response = document_body(&key, &data);
                state.documents.insert(key, data);
                ResponseTemplate::new(201).set_body_json(response)
            }
            ("PATCH", Some(document_id)) => {
                state.update_calls += 1;
                if let Some(status) = state.reject_updates {
                    return error_response(status, "Forced update failure", "general_server_error");
                }

                let body: Value = serde_json::from_slice(&request.body).unwrap_or(Value::Null);
                let Some(Value::Object(data)) = body.get("data").cloned() else {
                    return error_response(400, "Invalid document structure", "document_invalid_structure");
                };

                let key = key(&database_id, &collection_id, &document_id);
                let Some(stored) = state.documents.get_mut(&key) else {
                    return error_response(
                        404,
                        "Document with the requested ID could not be found.",
                        "document_not_found",
                    );
                };

                stored.extend(data);
                let response = document_body(&key, stored);
                ResponseTemplate::new(200).set_body_json(response)
            }
            ("GET", Some(document_id)) => {
                let key = key(&database_id, &collection_id, &document_id);
                match state.documents.get(&key) {
                    Some(data) => ResponseTemplate::new(200).set_body_json(document_body(&key, data)),
                    None => error_response(
                        404,
                        "Document with the requested ID could not be found.",
                        "document_not_found",
                    ),
                }
            }
            ("GET", None) => {
                let documents: Vec<Value> = state
                    .documents
                    .iter()
                    .filter(|((db, col, _), _)| *db == database_id && *col == collection_id)
                    .map(|(key, data)| document_body(key, data))
                    .collect();
                ResponseTemplate::new(200).set_body_json(json!({
                    "total": documents.len(),
                    "documents": documents
                }))
            }
            _ => error_response(405, "Method not allowed", "general_route_not_found"),
        }
    }
}
