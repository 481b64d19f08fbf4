//! Error types for bot storage.

use thiserror::Error;

use crate::types::BotId;

/// Errors produced by [`BotStore`](crate::traits::BotStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No bot with the given id.
    #[error("botId `{0}` does not exist.")]
    BotNotFound(BotId),

    /// JSON encoding or decoding of a stored blob failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A stored value violated an invariant (unparseable id, bad blob).
    #[error("integrity error: {reason}")]
    Integrity { reason: String },
}
