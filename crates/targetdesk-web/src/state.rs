//! Shared application state for the web server.

use sqlx::PgPool;
use std::sync::Arc;
use targetdesk_exchange::UploadStore;

/// Shared state injected into every Axum handler.
///
/// Each handler takes connections from the pool for the duration of one
/// request; nothing spans requests.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub uploads: UploadStore,
}

impl AppState {
    pub fn new(db: PgPool, uploads: UploadStore) -> Self {
        Self { db, uploads }
    }
}

pub type SharedState = Arc<AppState>;
