//! Bot records and the values used to create and update them.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default bot name applied when a creation request omits one.
pub const DEFAULT_BOT_NAME: &str = "Alexa";
/// Default timezone.
pub const DEFAULT_TIMEZONE: &str = "UTC";
/// Default language code.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Default avatar image.
pub const DEFAULT_AVATAR_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/7/7c/Profile_avatar_placeholder_large.png";

/// Unique bot identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BotId(pub Uuid);

impl BotId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        BotId(Uuid::new_v4())
    }
}

impl Default for BotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BotId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BotId(Uuid::parse_str(s)?))
    }
}

/// A stored bot.
///
/// `data` is the bot's flow document, held as one opaque JSON blob. The
/// store never interprets it; listing operations leave it `None` to avoid
/// hauling blobs nobody asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct BotRecord {
    pub bot_id: BotId,
    pub name: String,
    pub timezone: String,
    pub language: String,
    pub avatar_url: String,
    /// Creation time, epoch milliseconds.
    pub created_at: u64,
    /// Last update time, epoch milliseconds.
    pub updated_at: u64,
    pub data: Option<serde_json::Value>,
}

/// Creation parameters. [`NewBot::default`] carries the studio defaults.
#[derive(Debug, Clone)]
pub struct NewBot {
    pub name: String,
    pub timezone: String,
    pub language: String,
    pub avatar_url: String,
}

impl Default for NewBot {
    fn default() -> Self {
        NewBot {
            name: DEFAULT_BOT_NAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct BotUpdate {
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub avatar_url: Option<String>,
}

/// Listing window over the bot collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination { skip: 0, limit: 10 }
    }
}

/// Current wall-clock time as epoch milliseconds. Clocks before the epoch
/// clamp to zero.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_id_display_and_parse_round_trip() {
        let id = BotId::new();
        let parsed: BotId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn new_bot_defaults_match_the_studio() {
        let new = NewBot::default();
        assert_eq!(new.name, "Alexa");
        assert_eq!(new.timezone, "UTC");
        assert_eq!(new.language, "en");
        assert!(new.avatar_url.ends_with(".png"));
    }

    #[test]
    fn default_pagination_is_first_ten() {
        assert_eq!(Pagination::default(), Pagination { skip: 0, limit: 10 });
    }

    #[test]
    fn now_ms_is_recent() {
        // 2024-01-01 in epoch milliseconds.
        assert!(now_ms() > 1_704_067_200_000);
    }
}
