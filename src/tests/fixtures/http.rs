// Request helpers for driving the full router with `oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::table_store::in_memory::InMemoryTableStore;
use crate::shell::config::Config;
use crate::shell::http::router;
use crate::shell::state::AppState;

pub fn test_app() -> Router {
    router(AppState::new(
        Arc::new(InMemoryTableStore::new()),
        Config::default(),
    ))
}

pub fn offline_app() -> Router {
    let mut store = InMemoryTableStore::new();
    store.toggle_offline();
    router(AppState::new(Arc::new(store), Config::default()))
}

pub fn request(method: Method, uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user {
        builder = builder.header("x-user-id", user_id);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(user_id) = user {
        builder = builder.header("x-user-id", user_id);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends one request through a clone of the router. An empty body reads as `Value::Null`.
pub async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
