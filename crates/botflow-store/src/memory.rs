//! In-memory implementation of [`BotStore`], used by tests and by the
//! server's ephemeral mode.

use indexmap::IndexMap;

use crate::error::StoreError;
use crate::traits::BotStore;
use crate::types::{now_ms, BotId, BotRecord, BotUpdate, NewBot, Pagination};

/// Bot storage backed by an insertion-ordered map. Insertion order doubles
/// as creation order, so listings match the SQLite backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bots: IndexMap<BotId, BotRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}

impl BotStore for InMemoryStore {
    fn create_bot(&mut self, new: NewBot) -> Result<BotRecord, StoreError> {
        let now = now_ms();
        let record = BotRecord {
            bot_id: BotId::new(),
            name: new.name,
            timezone: new.timezone,
            language: new.language,
            avatar_url: new.avatar_url,
            created_at: now,
            updated_at: now,
            data: None,
        };
        self.bots.insert(record.bot_id, record.clone());
        Ok(record)
    }

    fn get_bot(&self, id: BotId) -> Result<BotRecord, StoreError> {
        self.bots
            .get(&id)
            .cloned()
            .ok_or(StoreError::BotNotFound(id))
    }

    fn list_bots(&self, page: Pagination) -> Result<Vec<BotRecord>, StoreError> {
        Ok(self
            .bots
            .values()
            .skip(page.skip)
            .take(page.limit)
            .map(|record| BotRecord {
                data: None,
                ..record.clone()
            })
            .collect())
    }

    fn update_bot(&mut self, id: BotId, update: BotUpdate) -> Result<BotRecord, StoreError> {
        let record = self.bots.get_mut(&id).ok_or(StoreError::BotNotFound(id))?;
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(timezone) = update.timezone {
            record.timezone = timezone;
        }
        if let Some(language) = update.language {
            record.language = language;
        }
        if let Some(avatar_url) = update.avatar_url {
            record.avatar_url = avatar_url;
        }
        record.updated_at = now_ms();
        Ok(record.clone())
    }

    fn delete_bot(&mut self, id: BotId) -> Result<(), StoreError> {
        self.bots
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::BotNotFound(id))
    }

    fn save_data(&mut self, id: BotId, data: serde_json::Value) -> Result<(), StoreError> {
        let record = self.bots.get_mut(&id).ok_or(StoreError::BotNotFound(id))?;
        record.data = Some(data);
        record.updated_at = now_ms();
        Ok(())
    }
}
