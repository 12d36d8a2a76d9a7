//! Health & readiness handlers.
//!
//! - GET /healthz  -> simple liveness ("ok")
//! - GET /readyz   -> readiness that checks a pooled connection can run a query
//!
//! Both are mounted outside the session scope so probes never hold a
//! request session.

use crate::session::SessionProvider;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::HashMap;

/// `GET /healthz`
///
/// Very small liveness probe: always returns 200 OK with a plain JSON body.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /readyz`
///
/// Runs `SELECT 1` on the pool and reports pool occupancy alongside the
/// session counters. HTTP 200 when the query succeeds, 503 otherwise.
pub async fn readyz(State(sessions): State<SessionProvider>) -> impl IntoResponse {
    let sqlite_check = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(sessions.pool())
        .await
    {
        Ok(1) => CheckStatus {
            ok: true,
            error: None,
        },
        Ok(v) => CheckStatus {
            ok: false,
            error: Some(format!("unexpected result: {}", v)),
        },
        Err(e) => CheckStatus {
            ok: false,
            error: Some(format!("error: {}", e)),
        },
    };

    let overall_ok = sqlite_check.ok;
    let mut checks = HashMap::new();
    checks.insert("sqlite", sqlite_check);

    let counts = sessions.stats();
    let body = ReadyResponse {
        status: if overall_ok {
            "ok".into()
        } else {
            "error".into()
        },
        checks,
        pool_size: sessions.pool().size(),
        active_sessions: counts.active,
    };

    let status = if overall_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    checks: HashMap<&'static str, CheckStatus>,
    pool_size: u32,
    active_sessions: u64,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    error: Option<String>,
}
