//! Per-entity data operations.
//!
//! Every function takes the caller's `&mut SqliteConnection` (the request's
//! scoped session) and runs exactly one statement. Services never open or
//! release connections themselves.

pub mod buyer_service;
pub mod car_service;
pub mod item_service;
pub mod sale_service;
pub mod seller_service;
pub mod stock_service;
pub mod user_service;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    ReferenceNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database session already released")]
    SessionReleased,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Offset/limit window applied to list queries, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Map an INSERT failure: foreign-key violations mean a parent row is gone,
/// unique violations mean a duplicate.
pub(crate) fn insert_error(err: sqlx::Error, entity: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::ReferenceNotFound(format!("record referenced by {entity}"))
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(format!("{entity} already exists"))
        }
        _ => StoreError::Sqlx(err),
    }
}

/// Map a DELETE failure: a foreign-key violation means dependents still point here.
pub(crate) fn delete_error(err: sqlx::Error, entity: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::Conflict(format!("{entity} is still referenced by other records"))
        }
        _ => StoreError::Sqlx(err),
    }
}
