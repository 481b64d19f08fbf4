//! Service layer between HTTP handlers and the bot store.
//!
//! [`BotService`] owns the storage backend behind the [`BotStore`] trait and
//! applies the API's semantics on top of it. Handlers stay thin: they parse
//! requests, call one service method, and shape the response.

use botflow_store::{
    BotId, BotRecord, BotStore, BotUpdate, InMemoryStore, NewBot, Pagination, SqliteStore,
};

use crate::error::ApiError;

/// Owns the bot store for one server process.
pub struct BotService {
    store: Box<dyn BotStore + Send>,
}

impl BotService {
    /// Opens a service backed by the SQLite file at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        Ok(BotService {
            store: Box::new(SqliteStore::open(db_path)?),
        })
    }

    /// Opens a service on an ephemeral in-memory store (tests, demos).
    pub fn in_memory() -> Result<Self, ApiError> {
        Ok(BotService {
            store: Box::new(InMemoryStore::new()),
        })
    }

    pub fn create_bot(&mut self, new: NewBot) -> Result<BotRecord, ApiError> {
        Ok(self.store.create_bot(new)?)
    }

    /// Fetches one bot including its flow blob. A bot that has never saved
    /// a flow reports an empty JSON object, so clients can always read
    /// `data` off the full view.
    pub fn get_bot(&self, id: BotId) -> Result<BotRecord, ApiError> {
        let mut record = self.store.get_bot(id)?;
        if record.data.is_none() {
            record.data = Some(serde_json::json!({}));
        }
        Ok(record)
    }

    pub fn list_bots(&self, page: Pagination) -> Result<Vec<BotRecord>, ApiError> {
        Ok(self.store.list_bots(page)?)
    }

    pub fn update_bot(&mut self, id: BotId, update: BotUpdate) -> Result<BotRecord, ApiError> {
        Ok(self.store.update_bot(id, update)?)
    }

    pub fn delete_bot(&mut self, id: BotId) -> Result<(), ApiError> {
        Ok(self.store.delete_bot(id)?)
    }

    /// Stores a flow document blob verbatim. Only JSON objects are accepted;
    /// what is inside the object stays opaque to the service.
    pub fn save_data(&mut self, id: BotId, data: serde_json::Value) -> Result<(), ApiError> {
        if !data.is_object() {
            return Err(ApiError::BadRequest(
                "flow data must be a JSON object".to_string(),
            ));
        }
        Ok(self.store.save_data(id, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_bot_defaults_missing_data_to_an_empty_object() {
        let mut service = BotService::in_memory().unwrap();
        let id = service.create_bot(NewBot::default()).unwrap().bot_id;
        let record = service.get_bot(id).unwrap();
        assert_eq!(record.data, Some(json!({})));
    }

    #[test]
    fn save_data_rejects_non_objects() {
        let mut service = BotService::in_memory().unwrap();
        let id = service.create_bot(NewBot::default()).unwrap().bot_id;
        let err = service.save_data(id, json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        let err = service.save_data(id, json!("text")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn saved_objects_come_back_verbatim() {
        let mut service = BotService::in_memory().unwrap();
        let id = service.create_bot(NewBot::default()).unwrap().bot_id;
        let blob = json!({"elements": [], "position": [1.0, 2.0], "zoom": 0.5});
        service.save_data(id, blob.clone()).unwrap();
        assert_eq!(service.get_bot(id).unwrap().data, Some(blob));
    }
}
