//! The storage contract for bot records.

use crate::error::StoreError;
use crate::types::{BotId, BotRecord, BotUpdate, NewBot, Pagination};

/// Storage backend for bots and their flow blobs.
///
/// Implementations are synchronous; the HTTP layer serializes access through
/// a single async mutex, and the CLI runs one operation at a time.
pub trait BotStore {
    /// Creates a bot from `new`, assigning a fresh id and timestamps.
    fn create_bot(&mut self, new: NewBot) -> Result<BotRecord, StoreError>;

    /// Fetches one bot, including its stored flow blob.
    fn get_bot(&self, id: BotId) -> Result<BotRecord, StoreError>;

    /// Lists bots in creation order, windowed by `page`. Listed records
    /// carry no flow blob.
    fn list_bots(&self, page: Pagination) -> Result<Vec<BotRecord>, StoreError>;

    /// Applies the non-`None` fields of `update` and bumps `updated_at`.
    /// Returns the updated record.
    fn update_bot(&mut self, id: BotId, update: BotUpdate) -> Result<BotRecord, StoreError>;

    /// Deletes a bot and its flow blob.
    fn delete_bot(&mut self, id: BotId) -> Result<(), StoreError>;

    /// Replaces the bot's flow blob and bumps `updated_at`.
    fn save_data(&mut self, id: BotId, data: serde_json::Value) -> Result<(), StoreError>;
}
