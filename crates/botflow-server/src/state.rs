//! Application state shared across handlers.
//!
//! [`AppState`] hands every handler the same [`BotService`] behind an
//! `Arc<tokio::sync::Mutex<>>`; the async mutex lets handlers await the
//! lock instead of blocking a runtime worker.
//!
//! A `tokio::sync::RwLock` would allow concurrent reads, but the SQLite
//! backend holds a `rusqlite::Connection`, which is `!Sync`, so the service
//! cannot live behind one. One writer at a time is the intended model
//! anyway: the canvas is single-user and a whole-document save is the unit
//! of persistence.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::BotService;

/// State cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    /// The shared bot service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<BotService>>,
}

impl AppState {
    /// Creates state with a `BotService` backed by the given SQLite
    /// database path.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(BotService::new(db_path)?)),
        })
    }

    /// Creates state with an in-memory store (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        Ok(AppState {
            service: Arc::new(tokio::sync::Mutex::new(BotService::in_memory()?)),
        })
    }
}
