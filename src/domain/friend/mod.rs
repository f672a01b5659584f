//! Friend domain: people the signed-in user follows.
//!
//! Many friend fields have no stable schema on the server side; those are
//! kept as raw JSON (`serde_json::Value`) so nothing is lost on the way through.

pub mod client;
pub mod wire;

use crate::shared::Xuid;
use crate::shared::serde_util::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Friend {
    pub xuid: Xuid,
    #[serde(deserialize_with = "null_as_default")]
    pub is_favorite: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_following_caller: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_followed_by_caller: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_identity_shared: bool,
    pub added_date_time_utc: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub real_name: String,
    #[serde(rename = "displayPicRaw", deserialize_with = "null_as_default")]
    pub display_pic_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub use_avatar: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub gamertag: String,
    /// Sent as a string by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub gamer_score: String,
    #[serde(deserialize_with = "null_as_default")]
    pub xbox_one_rep: String,
    #[serde(deserialize_with = "null_as_default")]
    pub presence_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub presence_text: String,
    pub presence_devices: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub is_broadcasting: bool,
    pub is_cloaked: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub is_quarantined: bool,
    pub suggestion: Value,
    pub recommendation: Value,
    pub title_history: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub multiplayer_summary: MultiplayerSummary,
    pub recent_player: Value,
    pub follower: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_color: PreferredColor,
    pub presence_details: Value,
    pub title_presence: Value,
    pub title_summaries: Value,
    pub presence_title_ids: Value,
    pub detail: Value,
    pub community_manager_titles: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub social_manager: SocialManager,
    #[serde(deserialize_with = "null_as_default")]
    pub broadcast: Vec<Value>,
    pub tournament_summary: Value,
    pub avatar: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplayerSummary {
    #[serde(rename = "InMultiplayerSession", deserialize_with = "null_as_default")]
    pub in_multiplayer_session: i64,
    #[serde(rename = "InParty", deserialize_with = "null_as_default")]
    pub in_party: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferredColor {
    #[serde(deserialize_with = "null_as_default")]
    pub primary_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub secondary_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tertiary_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialManager {
    #[serde(rename = "titleIds", deserialize_with = "null_as_default")]
    pub title_ids: Vec<Value>,
}
