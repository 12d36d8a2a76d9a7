//! Shared harness: a fresh SQLite file per test, migrated, behind the real router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
};
use dealership_api::{
    db::{self, PoolSettings},
    policy::{self, AdminGate},
    routes::routes::{App, app},
    session::SessionProvider,
    state::AppState,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::{path::PathBuf, time::Duration};
use tower::util::ServiceExt; // for `oneshot`
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";

pub struct TestApp {
    pub router: App,
    pub sessions: SessionProvider,
    pub pool: SqlitePool,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Helper function to create a test app instance backed by its own database file.
pub async fn spawn_app() -> TestApp {
    let path = std::env::temp_dir().join(format!("dealership-test-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    let settings = PoolSettings {
        max_connections: 5,
        acquire_timeout: Duration::from_secs(10),
    };
    let pool = db::connect(&url, &settings).await.unwrap();
    db::migrate(&pool).await.unwrap();

    let sessions = SessionProvider::new(pool.clone());
    let state = AppState::new(sessions.clone(), AdminGate::new(ADMIN_TOKEN));
    let cors = policy::cors_layer(&["http://localhost".to_string(), ALLOWED_ORIGIN.to_string()])
        .unwrap();

    TestApp {
        router: app(state, cors),
        sessions,
        pool,
        path,
    }
}

/// Send a request with optional JSON body and extra headers, returning the raw response.
pub async fn request(
    app: &App,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_string(&value).unwrap())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Helper function to send a JSON request and get the response (REST API)
pub async fn send(app: &App, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = request(app, method, uri, body, &[]).await;
    let status = response.status();
    (status, json_body(response).await)
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_car(app: &App, make: &str, model: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/cars",
        Some(json!({ "make": make, "model": model, "year": 2022, "price": 24500.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create car failed: {body}");
    body["id"].as_i64().unwrap()
}
