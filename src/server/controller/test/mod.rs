use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, fixture};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    router::router,
    testing::{state_with_config, test_config, FRONTEND_ORIGIN},
};


/// Router wired to the services of `test`.
fn app(test: &TestContext) -> Router {
    app_with_config(test_config(test))
}

fn app_with_config(config: Config) -> Router {
    let cors_origins = config.cors_origins.clone();
    router(&cors_origins).with_state(state_with_config(config))
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}
