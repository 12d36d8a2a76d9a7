//! Cross-cutting request policy: CORS allow-list and the admin token gate.

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::errors::AppError;

/// Header that must carry the admin token on every `/admin` request.
pub const ADMIN_TOKEN_HEADER: &str = "x-token";

/// Build the CORS layer for the configured origins.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight rather than answered with `*`.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin `{origin}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Static token check for the admin router.
#[derive(Clone)]
pub struct AdminGate {
    token: Arc<str>,
}

impl AdminGate {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// 401 when the header is absent, 403 when it carries the wrong value.
    pub fn check(&self, presented: Option<&HeaderValue>) -> Result<(), AppError> {
        let Some(value) = presented else {
            return Err(AppError::unauthorized("X-Token header missing"));
        };
        match value.to_str() {
            Ok(token) if token == &*self.token => Ok(()),
            _ => Err(AppError::forbidden("X-Token header invalid")),
        }
    }
}

/// Route layer run before any admin handler.
pub async fn require_admin_token(
    State(gate): State<AdminGate>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Err(err) = gate.check(req.headers().get(ADMIN_TOKEN_HEADER)) {
        tracing::warn!(path = %req.uri().path(), "rejected admin request: {}", err);
        return Err(err);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn gate_distinguishes_missing_and_wrong_tokens() {
        let gate = AdminGate::new("fake-super-secret-token");

        let missing = gate.check(None).unwrap_err();
        assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

        let wrong = HeaderValue::from_static("guess");
        assert_eq!(gate.check(Some(&wrong)).unwrap_err().status, StatusCode::FORBIDDEN);

        let right = HeaderValue::from_static("fake-super-secret-token");
        assert!(gate.check(Some(&right)).is_ok());
    }

    #[test]
    fn rejects_unparseable_origin() {
        assert!(cors_layer(&["http://localhost\n".to_string()]).is_err());
        assert!(cors_layer(&["http://localhost:8080".to_string()]).is_ok());
    }
}
