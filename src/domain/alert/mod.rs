//! Alert domain: notifications about activity on the user's content.

pub mod client;
pub mod wire;

use crate::shared::Xuid;
use crate::shared::serde_util::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alert {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    pub actor_xuid: Xuid,
    #[serde(deserialize_with = "null_as_default")]
    pub actor_gamertag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_path: String,
    pub owner_xuid: Xuid,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_gamertag: String,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub seen: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub root_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub club_id: String,
}
