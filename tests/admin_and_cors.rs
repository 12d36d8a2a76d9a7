//! Admin token gate and CORS allow-list.

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
};
use common::{ADMIN_TOKEN, ALLOWED_ORIGIN, json_body, request, spawn_app};
use dealership_api::policy::{ADMIN_TOKEN_HEADER, AdminGate, require_admin_token};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tower::util::ServiceExt; // for `oneshot`

#[tokio::test]
async fn admin_requires_the_token_header() {
    let app = spawn_app().await;

    let missing = request(&app.router, "POST", "/admin", None, &[]).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = request(
        &app.router,
        "POST",
        "/admin",
        None,
        &[(ADMIN_TOKEN_HEADER, "guess")],
    )
    .await;
    assert_eq!(wrong.status(), StatusCode::FORBIDDEN);

    let ok = request(
        &app.router,
        "POST",
        "/admin",
        None,
        &[(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)],
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(json_body(ok).await["message"], "Admin getting schwifty");
}

#[tokio::test]
async fn admin_root_accepts_a_trailing_slash() {
    let app = spawn_app().await;

    let missing = request(&app.router, "POST", "/admin/", None, &[]).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let ok = request(
        &app.router,
        "POST",
        "/admin/",
        None,
        &[(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)],
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(json_body(ok).await["message"], "Admin getting schwifty");
}

#[tokio::test]
async fn admin_reports_session_counters_and_teapot() {
    let app = spawn_app().await;
    request(&app.router, "GET", "/api/v1/cars", None, &[]).await;

    let stats = request(
        &app.router,
        "GET",
        "/admin/sessions",
        None,
        &[(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)],
    )
    .await;
    assert_eq!(stats.status(), StatusCode::OK);
    let body = json_body(stats).await;
    // The stats request itself holds the second session while it is answered.
    assert_eq!(body["opened"], 2);
    assert_eq!(body["released"], 1);
    assert_eq!(body["active"], 1);

    let teapot = request(
        &app.router,
        "GET",
        "/admin/teapot",
        None,
        &[(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)],
    )
    .await;
    assert_eq!(teapot.status(), StatusCode::IM_A_TEAPOT);
}

#[tokio::test]
async fn gate_runs_before_admin_logic() {
    let reached = Arc::new(AtomicBool::new(false));
    let flag = reached.clone();
    let router = Router::new()
        .route(
            "/admin/secret",
            get(move || async move {
                flag.store(true, Ordering::SeqCst);
                "secret"
            }),
        )
        .route_layer(middleware::from_fn_with_state(
            AdminGate::new(ADMIN_TOKEN),
            require_admin_token,
        ));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/admin/secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(!reached.load(Ordering::SeqCst));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/admin/secret")
                .header(ADMIN_TOKEN_HEADER, ADMIN_TOKEN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
}

#[tokio::test]
async fn cors_allows_only_listed_origins() {
    let app = spawn_app().await;

    let preflight = request(
        &app.router,
        "OPTIONS",
        "/api/v1/cars",
        None,
        &[
            ("origin", ALLOWED_ORIGIN),
            ("access-control-request-method", "POST"),
            ("access-control-request-headers", "content-type"),
        ],
    )
    .await;
    let headers = preflight.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        headers.get("access-control-allow-credentials").unwrap(),
        "true"
    );
    assert_eq!(headers.get("access-control-allow-methods").unwrap(), "POST");

    let foreign = request(
        &app.router,
        "GET",
        "/api/v1/cars",
        None,
        &[("origin", "https://evil.example")],
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::OK);
    assert!(foreign.headers().get("access-control-allow-origin").is_none());
}
