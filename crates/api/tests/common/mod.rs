#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use filmlib_api::config::ServerConfig;
use filmlib_api::router::build_app_router;
use filmlib_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the full application router over the given pool, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send one request. `role` becomes the `role` cookie when given.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    role: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header("cookie", format!("role={role}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET as `admin`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some("admin"), None).await
}

/// POST a JSON body as `admin`.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some("admin"), Some(body)).await
}

/// PUT a JSON body as `admin`.
pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some("admin"), Some(body)).await
}

/// DELETE as `admin`.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some("admin"), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an actor through the API and return its ID.
pub async fn create_actor(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/actors",
        serde_json::json!({"name": name, "gender": "M", "birth_date": "1964-09-02"}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a movie through the API and return its ID.
pub async fn create_movie(pool: &PgPool, title: &str, rating: i64, actor_ids: &[i64]) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/movies",
        serde_json::json!({
            "title": title,
            "description": "",
            "release_date": "1999-03-31",
            "rating": rating,
            "actor_ids": actor_ids,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
