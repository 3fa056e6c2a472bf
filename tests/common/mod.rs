#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use productos_api::{
    AppState, app,
    auth::CredentialStore,
    config::SecurityConfig,
    repository::InMemoryProductoRepository,
};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN: (&str, &str) = ("admin", "admin123");
pub const USER: (&str, &str) = ("user", "user123");

pub fn test_app() -> Router {
    let credentials = CredentialStore::from_config(&SecurityConfig::with_cost(4)).unwrap();
    let state = AppState::new(Arc::new(InMemoryProductoRepository::new()), credentials);
    app::router(state, 1024 * 1024)
}

pub fn basic(credentials: (&str, &str)) -> String {
    let (username, password) = credentials;
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(credentials) = credentials {
        builder = builder.header(header::AUTHORIZATION, basic(credentials));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// Creates a producto as admin and returns its assigned id.
pub async fn create(app: &Router, body: Value) -> i64 {
    let resp = send(app, "POST", "/api/productos", Some(ADMIN), Some(body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await["id"].as_i64().unwrap()
}
