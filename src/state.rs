//! Shared application state handed to every router.

use axum::extract::FromRef;

use crate::policy::AdminGate;
use crate::session::SessionProvider;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub sessions: SessionProvider,
    pub admin: AdminGate,
}

impl AppState {
    pub fn new(sessions: SessionProvider, admin: AdminGate) -> Self {
        Self { sessions, admin }
    }
}
