//! Handlers under `/admin`. The token gate runs before any of them.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::session::{SessionCounts, SessionProvider};

/// POST `/admin`
pub async fn admin_greeting() -> impl IntoResponse {
    Json(json!({ "message": "Admin getting schwifty" }))
}

/// GET `/admin/sessions`: lifecycle counters of the request-scoped sessions.
pub async fn session_stats(State(sessions): State<SessionProvider>) -> Json<SessionCounts> {
    Json(sessions.stats())
}

/// GET `/admin/teapot`: the documented 418 example response.
pub async fn teapot() -> impl IntoResponse {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({ "description": "I'm a teapot" })),
    )
}
