//! Account domain: the signed-in profile and gamertag generation.

pub mod client;
mod convert;
pub mod settings;
pub mod wire;

use crate::shared::Xuid;
use serde::{Deserialize, Serialize};

pub use settings::{project, RawSetting, SettingId};

pub const ACCOUNT_TIER_GOLD: &str = "Gold";
pub const ACCOUNT_TIER_SILVER: &str = "Silver";

// ─── Account ─────────────────────────────────────────────────────────────────

/// The authenticated user's profile.
///
/// Everything except the identifiers comes from the server's settings list
/// (see [`settings::project`]); fields stay `None` when the server did not
/// send the matching setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Xuid,
    pub host_id: Xuid,
    pub is_sponsored_user: bool,
    pub tier: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub gamerscore: Option<i64>,
    pub gamertag: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "preferredColorURL")]
    pub preferred_color_url: Option<String>,
    pub real_name: Option<String>,
    /// Settings exactly as the server returned them, in order.
    pub settings: Vec<RawSetting>,
}

impl Account {
    pub fn is_gold(&self) -> bool {
        self.tier.as_deref() == Some(ACCOUNT_TIER_GOLD)
    }
}
