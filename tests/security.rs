mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{ADMIN, USER, body_json, create, send, test_app};

fn teclado() -> serde_json::Value {
    json!({ "nombre": "Teclado", "descripcion": "USB", "precio": 25.5, "stock": 10 })
}

#[tokio::test]
async fn missing_credentials_get_basic_challenge() {
    let app = test_app();

    for (method, uri) in [
        ("GET", "/api/productos"),
        ("GET", "/api/productos/1"),
        ("POST", "/api/productos"),
        ("PUT", "/api/productos/1"),
        ("DELETE", "/api/productos/1"),
        ("GET", "/health"),
    ] {
        let resp = send(&app, method, uri, None, None).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");

        let challenge = resp.headers().get(header::WWW_AUTHENTICATE).unwrap();
        assert!(challenge.to_str().unwrap().starts_with("Basic"));
    }
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = test_app();

    let resp = send(&app, "GET", "/api/productos", Some(("admin", "user123")), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = send(&app, "GET", "/api/productos", Some(("nadie", "admin123")), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_tokens_are_not_accepted() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = test_app();
    let request = Request::get("/api/productos")
        .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_role_can_read_but_not_write() {
    let app = test_app();
    let id = create(&app, teclado()).await;
    let uri = format!("/api/productos/{id}");

    let resp = send(&app, "GET", "/api/productos", Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", &uri, Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "POST", "/api/productos", Some(USER), Some(teclado())).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(&app, "PUT", &uri, Some(USER), Some(teclado())).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(&app, "DELETE", &uri, Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(&app, "GET", "/api/productos", Some(ADMIN), None).await;
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn forbidden_write_does_not_validate_or_persist() {
    let app = test_app();

    let resp = send(
        &app,
        "POST",
        "/api/productos",
        Some(USER),
        Some(json!({ "nombre": "", "precio": -1, "stock": -1 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(&app, "GET", "/api/productos", Some(USER), None).await;
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn other_paths_accept_any_authenticated_user() {
    let app = test_app();

    let resp = send(&app, "GET", "/health", Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", "/health/ready", Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "status": "ready", "store": "memory" })
    );
}

#[tokio::test]
async fn teclado_walkthrough() {
    let app = test_app();

    let resp = send(&app, "POST", "/api/productos", Some(ADMIN), Some(teclado())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["nombre"], "Teclado");

    let resp = send(&app, "GET", "/api/productos", Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([created]));

    let uri = format!("/api/productos/{id}");
    let resp = send(&app, "DELETE", &uri, Some(USER), None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(&app, "DELETE", &uri, Some(ADMIN), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", &uri, Some(ADMIN), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
