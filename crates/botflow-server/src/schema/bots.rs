//! Bot request/response types.
//!
//! The API speaks camelCase. Creation fields are all optional and fall back
//! to the studio defaults; update fields left out keep their stored value.

use serde::{Deserialize, Serialize};

use botflow_store::{
    BotId, BotRecord, BotUpdate, NewBot, DEFAULT_AVATAR_URL, DEFAULT_BOT_NAME, DEFAULT_LANGUAGE,
    DEFAULT_TIMEZONE,
};

fn default_name() -> String {
    DEFAULT_BOT_NAME.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

/// Body of `POST /bot/create`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBotRequest {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,
}

impl CreateBotRequest {
    pub fn into_new_bot(self) -> NewBot {
        NewBot {
            name: self.name,
            timezone: self.timezone,
            language: self.language,
            avatar_url: self.avatar_url,
        }
    }
}

/// Body of `PUT /bot/{bot_id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBotRequest {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateBotRequest {
    pub fn into_update(self) -> BotUpdate {
        BotUpdate {
            name: self.name,
            timezone: self.timezone,
            language: self.language,
            avatar_url: self.avatar_url,
        }
    }
}

/// A bot as the API returns it. `data` appears only on the single-bot view;
/// create, update, and list responses omit it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotView {
    pub bot_id: BotId,
    pub name: String,
    pub timezone: String,
    pub language: String,
    pub avatar_url: String,
    pub created_at: u64,
    pub updated_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<BotRecord> for BotView {
    fn from(record: BotRecord) -> Self {
        BotView {
            bot_id: record.bot_id,
            name: record.name,
            timezone: record.timezone,
            language: record.language,
            avatar_url: record.avatar_url,
            created_at: record.created_at,
            updated_at: record.updated_at,
            data: record.data,
        }
    }
}

/// Query window for `GET /bot/`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}
