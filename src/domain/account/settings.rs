//! Settings projection: `[{id, value}]` → typed `Account` fields.

use super::Account;
use crate::error::SettingError;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// One `{id, value}` entry from the server's settings list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSetting {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl RawSetting {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Setting identifiers that map onto an [`Account`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingId {
    AccountTier,
    Bio,
    GameDisplayPicRaw,
    Gamerscore,
    Gamertag,
    Location,
    PreferredColor,
    RealName,
}

impl SettingId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingId::AccountTier => "AccountTier",
            SettingId::Bio => "Bio",
            SettingId::GameDisplayPicRaw => "GameDisplayPicRaw",
            SettingId::Gamerscore => "Gamerscore",
            SettingId::Gamertag => "Gamertag",
            SettingId::Location => "Location",
            SettingId::PreferredColor => "PreferredColor",
            SettingId::RealName => "RealName",
        }
    }

    /// `None` for identifiers outside the recognized set.
    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "AccountTier" => Some(SettingId::AccountTier),
            "Bio" => Some(SettingId::Bio),
            "GameDisplayPicRaw" => Some(SettingId::GameDisplayPicRaw),
            "Gamerscore" => Some(SettingId::Gamerscore),
            "Gamertag" => Some(SettingId::Gamertag),
            "Location" => Some(SettingId::Location),
            "PreferredColor" => Some(SettingId::PreferredColor),
            "RealName" => Some(SettingId::RealName),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project `settings` onto `account`, in order.
///
/// Later entries overwrite earlier ones for the same identifier. Unknown
/// identifiers are skipped. A `Gamerscore` that is not an integer aborts the
/// projection; fields assigned before the bad entry keep their new values.
pub fn project(settings: &[RawSetting], account: &mut Account) -> Result<(), SettingError> {
    for setting in settings {
        let Some(id) = SettingId::from_id(&setting.id) else {
            continue;
        };
        let value = setting.value.clone();

        match id {
            SettingId::AccountTier => account.tier = Some(value),
            SettingId::Bio => account.bio = Some(value),
            SettingId::GameDisplayPicRaw => account.avatar_url = Some(value),
            SettingId::Gamerscore => {
                let score = value
                    .parse::<i64>()
                    .map_err(|source| SettingError::InvalidNumber {
                        id: setting.id.clone(),
                        value: setting.value.clone(),
                        source,
                    })?;
                account.gamerscore = Some(score);
            }
            SettingId::Gamertag => account.gamertag = Some(value),
            SettingId::Location => account.location = Some(value),
            SettingId::PreferredColor => account.preferred_color_url = Some(value),
            SettingId::RealName => account.real_name = Some(value),
        }
    }
    Ok(())
}
