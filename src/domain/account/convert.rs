//! Conversion: ProfileUserResponse → Account (settings projection).

use super::settings;
use super::wire::ProfileUserResponse;
use super::Account;
use crate::error::SettingError;

impl TryFrom<ProfileUserResponse> for Account {
    type Error = SettingError;

    /// Projection runs on a fresh value, so a failed conversion never hands
    /// out a partially projected account.
    fn try_from(source: ProfileUserResponse) -> Result<Self, Self::Error> {
        let mut account = Account {
            id: source.id,
            host_id: source.host_id,
            is_sponsored_user: source.is_sponsored_user,
            ..Account::default()
        };
        settings::project(&source.settings, &mut account)?;
        account.settings = source.settings;
        Ok(account)
    }
}
