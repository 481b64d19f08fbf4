//! Wire types for the bot endpoints.
//!
//! The API speaks camelCase. [`Bot`] mirrors the record the server returns;
//! [`CreateBot`] and [`UpdateBot`] send only the fields the caller set, so
//! the server's defaults and partial-update semantics apply.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bot as the API returns it.
///
/// `data` is the stored flow blob and only appears on single-bot fetches;
/// list, create, and update responses leave it `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bot {
    pub bot_id: Uuid,
    pub name: String,
    pub timezone: String,
    pub language: String,
    pub avatar_url: String,
    /// Creation time, epoch milliseconds.
    pub created_at: u64,
    /// Last update time, epoch milliseconds.
    pub updated_at: u64,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Body of the create call. Unset fields take the studio defaults
/// server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl CreateBot {
    /// A creation request that takes every server default.
    pub fn defaults() -> Self {
        CreateBot::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        CreateBot {
            name: Some(name.into()),
            ..CreateBot::default()
        }
    }
}

/// Body of the update call. Unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bot_deserializes_from_the_api_shape() {
        let bot: Bot = serde_json::from_value(json!({
            "botId": "6d9e24ab-4b51-4a4e-9e27-9d9c1b3a2f00",
            "name": "Alexa",
            "timezone": "UTC",
            "language": "en",
            "avatarUrl": "https://img/a.png",
            "createdAt": 1700000000000u64,
            "updatedAt": 1700000000001u64,
        }))
        .unwrap();
        assert_eq!(bot.name, "Alexa");
        assert_eq!(bot.data, None);
        assert_eq!(
            bot.bot_id.to_string(),
            "6d9e24ab-4b51-4a4e-9e27-9d9c1b3a2f00"
        );
    }

    #[test]
    fn data_field_comes_through_when_present() {
        let bot: Bot = serde_json::from_value(json!({
            "botId": "6d9e24ab-4b51-4a4e-9e27-9d9c1b3a2f00",
            "name": "Alexa",
            "timezone": "UTC",
            "language": "en",
            "avatarUrl": "https://img/a.png",
            "createdAt": 0,
            "updatedAt": 0,
            "data": {"elements": [], "position": [0.0, 0.0], "zoom": 1.0},
        }))
        .unwrap();
        assert!(bot.data.unwrap().is_object());
    }

    #[test]
    fn create_body_skips_unset_fields() {
        let body = serde_json::to_value(CreateBot::defaults()).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(CreateBot::named("Nova")).unwrap();
        assert_eq!(body, json!({"name": "Nova"}));
    }

    #[test]
    fn update_body_uses_camel_case() {
        let update = UpdateBot {
            avatar_url: Some("https://img/b.png".to_string()),
            ..UpdateBot::default()
        };
        let body = serde_json::to_value(update).unwrap();
        assert_eq!(body, json!({"avatarUrl": "https://img/b.png"}));
    }
}
