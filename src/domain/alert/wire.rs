//! Wire types for alert responses (REST).

use super::Alert;
use crate::http::Collection;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// `GET alerts` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub alerts: Vec<Alert>,
}

impl Collection for AlertsResponse {
    type Item = Alert;

    fn into_items(self) -> Vec<Alert> {
        self.alerts
    }
}
