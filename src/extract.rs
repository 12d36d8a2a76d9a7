//! Extractors whose rejections render as [`AppError`] validation responses.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::errors::{AppError, FieldError};
use crate::services::Page;
use crate::validation::Validate;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// JSON body that has also passed its [`Validate`] checks.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// `?skip=&limit=` on list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Negative `skip` and non-positive `limit` are rejected; `limit` above
    /// [`Page::MAX_LIMIT`] is clamped.
    pub fn page(&self) -> Result<Page, AppError> {
        let offset = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(Page::DEFAULT_LIMIT);

        let mut errors = Vec::new();
        if offset < 0 {
            errors.push(FieldError::new("skip", "must not be negative"));
        }
        if limit < 1 {
            errors.push(FieldError::new("limit", "must be at least 1"));
        }
        if !errors.is_empty() {
            return Err(AppError::validation("invalid pagination", errors));
        }

        Ok(Page {
            offset,
            limit: limit.min(Page::MAX_LIMIT),
        })
    }
}
