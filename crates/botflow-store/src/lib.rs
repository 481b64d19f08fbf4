//! Storage backends for the botflow studio.
//!
//! The HTTP service and the CLI both persist bots through the [`BotStore`]
//! trait. Two implementations ship here:
//!
//! - [`SqliteStore`]: the durable backend, one SQLite file with embedded
//!   migrations.
//! - [`InMemoryStore`]: ephemeral, for tests and throwaway servers.
//!
//! Flow documents are stored as opaque JSON blobs; the store never
//! interprets them. Decoding and validating flows is `botflow-core`'s job.

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root.
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::BotStore;
pub use types::{
    BotId, BotRecord, BotUpdate, NewBot, Pagination, DEFAULT_AVATAR_URL, DEFAULT_BOT_NAME,
    DEFAULT_LANGUAGE, DEFAULT_TIMEZONE,
};
