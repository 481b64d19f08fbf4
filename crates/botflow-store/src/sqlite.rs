//! SQLite implementation of [`BotStore`].
//!
//! One `Connection`, synchronous access. Multi-statement writes run inside
//! a transaction; reads map rows to [`BotRecord`] outside the rusqlite
//! closure so id and blob decoding can report integrity errors properly.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::StoreError;
use crate::schema;
use crate::traits::BotStore;
use crate::types::{now_ms, BotId, BotRecord, BotUpdate, NewBot, Pagination};

/// Raw column tuple shared by every bot SELECT.
type RawBotRow = (
    String,
    String,
    String,
    String,
    String,
    i64,
    i64,
    Option<String>,
);

/// Bot storage backed by a SQLite database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at `path` and applies migrations.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        Ok(SqliteStore {
            conn: schema::open_database(path)?,
        })
    }

    /// Opens an ephemeral in-memory store.
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(SqliteStore {
            conn: schema::open_in_memory()?,
        })
    }

    fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawBotRow> {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?,
        ))
    }

    fn decode_row(raw: RawBotRow) -> Result<BotRecord, StoreError> {
        let (bot_id, name, timezone, language, avatar_url, created_at, updated_at, data_json) =
            raw;
        let bot_id: BotId = bot_id.parse().map_err(|err| StoreError::Integrity {
            reason: format!("unparseable bot id `{bot_id}`: {err}"),
        })?;
        let data = match data_json {
            Some(text) => Some(serde_json::from_str(&text)?),
            None => None,
        };
        Ok(BotRecord {
            bot_id,
            name,
            timezone,
            language,
            avatar_url,
            created_at: created_at as u64,
            updated_at: updated_at as u64,
            data,
        })
    }

    fn fetch(conn: &Connection, id: BotId) -> Result<BotRecord, StoreError> {
        let raw = conn
            .query_row(
                "SELECT bot_id, name, timezone, language, avatar_url,
                        created_at, updated_at, data_json
                 FROM bots WHERE bot_id = ?1",
                params![id.to_string()],
                Self::read_row,
            )
            .optional()?
            .ok_or(StoreError::BotNotFound(id))?;
        Self::decode_row(raw)
    }
}

impl BotStore for SqliteStore {
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
        self.conn.execute(
            "INSERT INTO bots (bot_id, name, timezone, language, avatar_url,
                               created_at, updated_at, data_json)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL)",
            params![
                record.bot_id.to_string(),
                record.name,
                record.timezone,
                record.language,
                record.avatar_url,
                record.created_at as i64,
                record.updated_at as i64,
            ],
        )?;
        Ok(record)
    }

    fn get_bot(&self, id: BotId) -> Result<BotRecord, StoreError> {
        Self::fetch(&self.conn, id)
    }

    fn list_bots(&self, page: Pagination) -> Result<Vec<BotRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            // rowid breaks created_at ties from same-millisecond inserts.
            "SELECT bot_id, name, timezone, language, avatar_url,
                    created_at, updated_at, NULL
             FROM bots
             ORDER BY created_at ASC, rowid ASC
             LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt.query_map(
            params![page.limit as i64, page.skip as i64],
            Self::read_row,
        )?;
        let mut records = Vec::new();
        for raw in rows {
            records.push(Self::decode_row(raw?)?);
        }
        Ok(records)
    }

    fn update_bot(&mut self, id: BotId, update: BotUpdate) -> Result<BotRecord, StoreError> {
        let tx = self.conn.transaction()?;
        let mut record = Self::fetch(&tx, id)?;
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
        tx.execute(
            "UPDATE bots SET name = ?2, timezone = ?3, language = ?4,
                             avatar_url = ?5, updated_at = ?6
             WHERE bot_id = ?1",
            params![
                id.to_string(),
                record.name,
                record.timezone,
                record.language,
                record.avatar_url,
                record.updated_at as i64,
            ],
        )?;
        tx.commit()?;
        Ok(record)
    }

    fn delete_bot(&mut self, id: BotId) -> Result<(), StoreError> {
        let deleted = self
            .conn
            .execute("DELETE FROM bots WHERE bot_id = ?1", params![id.to_string()])?;
        if deleted == 0 {
            return Err(StoreError::BotNotFound(id));
        }
        Ok(())
    }

    fn save_data(&mut self, id: BotId, data: serde_json::Value) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&data)?;
        let updated = self.conn.execute(
            "UPDATE bots SET data_json = ?2, updated_at = ?3 WHERE bot_id = ?1",
            params![id.to_string(), blob, now_ms() as i64],
        )?;
        if updated == 0 {
            return Err(StoreError::BotNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = store();
        let created = store.create_bot(NewBot::default()).unwrap();
        let fetched = store.get_bot(created.bot_id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.timezone, "UTC");
        assert!(fetched.created_at > 0);
    }

    #[test]
    fn get_unknown_bot_fails_with_the_studio_message() {
        let store = store();
        let id = BotId::new();
        let err = store.get_bot(id).unwrap_err();
        assert_eq!(err.to_string(), format!("botId `{id}` does not exist."));
    }

    #[test]
    fn listing_pages_in_creation_order_without_blobs() {
        let mut store = store();
        let mut ids = Vec::new();
        for i in 0..4 {
            let new = NewBot {
                name: format!("bot-{i}"),
                ..NewBot::default()
            };
            let id = store.create_bot(new).unwrap().bot_id;
            store.save_data(id, json!({"zoom": 1.0})).unwrap();
            ids.push(id);
        }
        let all = store.list_bots(Pagination::default()).unwrap();
        assert_eq!(all.iter().map(|b| b.bot_id).collect::<Vec<_>>(), ids);
        assert!(all.iter().all(|b| b.data.is_none()));

        let window = store.list_bots(Pagination { skip: 1, limit: 2 }).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].name, "bot-1");
        assert_eq!(window[1].name, "bot-2");
    }

    #[test]
    fn update_applies_partial_fields() {
        let mut store = store();
        let created = store.create_bot(NewBot::default()).unwrap();
        let updated = store
            .update_bot(
                created.bot_id,
                BotUpdate {
                    language: Some("de".to_string()),
                    ..BotUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.language, "de");
        assert_eq!(updated.name, created.name);
        let fetched = store.get_bot(created.bot_id).unwrap();
        assert_eq!(fetched.language, "de");
        assert!(fetched.updated_at >= created.updated_at);
    }

    #[test]
    fn delete_is_definitive() {
        let mut store = store();
        let id = store.create_bot(NewBot::default()).unwrap().bot_id;
        store.delete_bot(id).unwrap();
        assert!(matches!(
            store.delete_bot(id),
            Err(StoreError::BotNotFound(_))
        ));
    }

    #[test]
    fn save_data_round_trips_the_blob() {
        let mut store = store();
        let id = store.create_bot(NewBot::default()).unwrap().bot_id;
        let blob = json!({
            "elements": [{"id": "x", "source": "a", "target": "b"}],
            "position": [4.0, 2.0],
            "zoom": 0.75,
        });
        store.save_data(id, blob.clone()).unwrap();
        let fetched = store.get_bot(id).unwrap();
        assert_eq!(fetched.data, Some(blob));
    }

    #[test]
    fn save_data_on_unknown_bot_fails() {
        let mut store = store();
        let err = store.save_data(BotId::new(), json!({})).unwrap_err();
        assert!(matches!(err, StoreError::BotNotFound(_)));
    }

    #[test]
    fn data_survives_reopening_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bots.db");
        let path = path.to_str().unwrap();

        let id = {
            let mut store = SqliteStore::open(path).unwrap();
            let id = store.create_bot(NewBot::default()).unwrap().bot_id;
            store.save_data(id, json!({"zoom": 2.0})).unwrap();
            id
        };

        let store = SqliteStore::open(path).unwrap();
        let fetched = store.get_bot(id).unwrap();
        assert_eq!(fetched.name, "Alexa");
        assert_eq!(fetched.data, Some(json!({"zoom": 2.0})));
    }
}
