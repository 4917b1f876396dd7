//! Mock of the Discord OAuth2 and user API.

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const AUTHORIZE_PATH: &str = "/api/oauth2/authorize";
pub const TOKEN_PATH: &str = "/api/oauth2/token";
pub const PROFILE_PATH: &str = "/api/users/@me";

pub struct MockDiscord {
    server: MockServer,
}

impl MockDiscord {
    /// Starts the mock on a random local port with no endpoints mounted.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn auth_url(&self) -> String {
        format!("{}{}", self.server.uri(), AUTHORIZE_PATH)
    }

    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.uri(), TOKEN_PATH)
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Answers the exchange of `code` with a bearer `access_token`.
    pub async fn grant_token(&self, code: &str, access_token: &str) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(body_string_contains(format!("code={code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": access_token,
                "token_type": "Bearer",
                "expires_in": 604800,
                "refresh_token": format!("refresh-{access_token}"),
                "scope": "identify email"
            })))
            .mount(&self.server)
            .await;
    }

    /// Answers every token exchange with an OAuth2 error object.
    pub async fn reject_token(&self, status: u16, error: &str) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": error,
                "error_description": "Invalid \"code\" in request."
            })))
            .mount(&self.server)
            .await;
    }

    /// Serves `profile` to requests authorized with `access_token`.
    pub async fn serve_profile(&self, access_token: &str, profile: Value) {
        Mock::given(method("GET"))
            .and(path(PROFILE_PATH))
            .and(header("Authorization", format!("Bearer {access_token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile))
            .mount(&self.server)
            .await;
    }

    /// Answers every profile request with `status`.
    pub async fn reject_profile(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(PROFILE_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "401: Unauthorized",
                "code": 0
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of requests received by the token endpoint.
    pub async fn token_requests(&self) -> usize {
        self.requests_to(TOKEN_PATH).await
    }

    /// Number of requests received by the profile endpoint.
    pub async fn profile_requests(&self) -> usize {
        self.requests_to(PROFILE_PATH).await
    }

    /// Bodies of the requests received by the token endpoint.
    pub async fn token_request_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == TOKEN_PATH)
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }

    async fn requests_to(&self, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == request_path)
            .count()
    }
}
