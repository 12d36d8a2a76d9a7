//! Request-scoped database sessions.
//!
//! [`scoped_session`] wraps every request under the API and admin routers:
//! it checks one connection out of the pool, hands it to the handler through
//! the request extensions as a [`DbSession`], and releases it once the inner
//! service has produced a response. Release lives in [`SessionGuard`]'s
//! `Drop`, so it also runs when the request future unwinds or is dropped.
//!
//! The released counter moves when the connection itself is dropped. A
//! handle still borrowed at release time therefore delays the count until
//! its last clone goes away, and the count stays exactly one per session.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use sqlx::{Sqlite, SqlitePool, pool::PoolConnection};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::{StoreError, StoreResult};

/// Response header carrying the id of the session that served the request.
pub const SESSION_ID_HEADER: &str = "x-session-id";

/// Opens sessions from an explicitly injected pool and counts their lifecycle.
#[derive(Clone)]
pub struct SessionProvider {
    pool: SqlitePool,
    stats: Arc<SessionStats>,
}

#[derive(Default)]
struct SessionStats {
    opened: AtomicU64,
    released: AtomicU64,
}

/// Point-in-time view of the session counters.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SessionCounts {
    pub opened: u64,
    pub released: u64,
    pub active: u64,
}

impl SessionProvider {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            stats: Arc::new(SessionStats::default()),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check a connection out of the pool and wrap it in a fresh session.
    ///
    /// Nothing is counted when acquisition fails, so a failed `begin` never
    /// leads to a release.
    pub async fn begin(&self) -> StoreResult<SessionGuard> {
        let conn = self.pool.acquire().await?;
        let id = Uuid::new_v4();
        self.stats.opened.fetch_add(1, Ordering::SeqCst);
        debug!(session_id = %id, "session opened");

        let held = HeldConnection {
            conn,
            session_id: id,
            stats: self.stats.clone(),
        };
        Ok(SessionGuard {
            session: DbSession {
                id,
                slot: Arc::new(Mutex::new(Some(held))),
            },
        })
    }

    pub fn stats(&self) -> SessionCounts {
        let opened = self.stats.opened.load(Ordering::SeqCst);
        let released = self.stats.released.load(Ordering::SeqCst);
        SessionCounts {
            opened,
            released,
            active: opened.saturating_sub(released),
        }
    }
}

/// A checked-out connection. Dropping it hands the connection back to the
/// pool and counts the release.
struct HeldConnection {
    conn: PoolConnection<Sqlite>,
    session_id: Uuid,
    stats: Arc<SessionStats>,
}

impl Drop for HeldConnection {
    fn drop(&mut self) {
        self.stats.released.fetch_add(1, Ordering::SeqCst);
        debug!(session_id = %self.session_id, "session released");
    }
}

/// Handle to the connection owned by the current request.
///
/// Cloning shares the same underlying connection; the handle only lives in
/// one request's extensions, so clones never cross requests. Handlers must
/// not keep a clone past their own lifetime: a clone that is still borrowed
/// when the scope ends keeps the connection out of the pool until it drops.
#[derive(Clone)]
pub struct DbSession {
    id: Uuid,
    slot: Arc<Mutex<Option<HeldConnection>>>,
}

impl DbSession {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Borrow the connection for the duration of the returned guard.
    ///
    /// Fails with `SessionReleased` once the request scope has ended.
    pub async fn conn(&self) -> StoreResult<MappedMutexGuard<'_, PoolConnection<Sqlite>>> {
        let slot = self.slot.lock().await;
        MutexGuard::try_map(slot, |held| held.as_mut().map(|held| &mut held.conn))
            .map_err(|_| StoreError::SessionReleased)
    }

    pub async fn is_released(&self) -> bool {
        self.slot.lock().await.is_none()
    }

    /// Give the connection back to the pool. Returns true only for the call
    /// that actually released it.
    ///
    /// A borrowed slot is left alone; the connection then goes back when the
    /// last handle drops.
    fn release(&self) -> bool {
        match self.slot.try_lock() {
            Ok(mut slot) => slot.take().is_some(),
            Err(_) => {
                warn!(session_id = %self.id, "session still borrowed at release");
                false
            }
        }
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<DbSession>()
            .cloned()
            .ok_or_else(|| AppError::internal("no database session attached to request"))
    }
}

/// Owns the release duty for one session.
pub struct SessionGuard {
    session: DbSession,
}

impl SessionGuard {
    pub fn session(&self) -> &DbSession {
        &self.session
    }

    /// End the scope now instead of at the end of the enclosing block.
    pub fn release(self) {}
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.release();
    }
}

/// Middleware giving each request its own session for the length of the request.
pub async fn scoped_session(
    State(provider): State<SessionProvider>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let guard = provider.begin().await?;
    let session_id = guard.session().id();
    req.extensions_mut().insert(guard.session().clone());

    let span = info_span!("session", %session_id);
    let mut response = next.run(req).instrument(span).await;

    guard.release();

    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response.headers_mut().insert(SESSION_ID_HEADER, value);
    }
    Ok(response)
}
