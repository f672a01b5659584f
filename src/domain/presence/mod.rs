//! Presence domain: what a user is doing right now, and where they were last seen.

pub mod client;

use crate::shared::Xuid;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// Online state of one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    #[serde(default)]
    pub xuid: Xuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub last_seen: Option<LastSeen>,
}

impl Presence {
    pub fn is_online(&self) -> bool {
        self.state.eq_ignore_ascii_case("Online")
    }
}

/// A device the user is signed in on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub device_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub titles: Vec<TitlePresence>,
}

/// A title running on a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitlePresence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_modified: String,
}

/// Last title and device seen for an offline user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSeen {
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_deserialize() {
        let json = r#"{
            "xuid": "2533274793093971",
            "state": "Online",
            "devices": [{
                "type": "Scarlett",
                "titles": [{
                    "id": "750323071",
                    "name": "Home",
                    "placement": "Background",
                    "state": "Active",
                    "lastModified": "2024-01-15T10:30:00.0000000Z"
                }]
            }]
        }"#;
        let presence: Presence = serde_json::from_str(json).unwrap();
        assert!(presence.is_online());
        assert_eq!(presence.devices[0].device_type, "Scarlett");
        assert_eq!(presence.devices[0].titles[0].name, "Home");
        assert!(presence.last_seen.is_none());
    }

    #[test]
    fn test_offline_presence_with_last_seen() {
        let json = r#"{
            "xuid": "1",
            "state": "Offline",
            "lastSeen": {
                "deviceType": "WindowsOneCore",
                "titleId": "1",
                "titleName": "Forza",
                "timestamp": "2024-01-15T10:30:00Z"
            }
        }"#;
        let presence: Presence = serde_json::from_str(json).unwrap();
        assert!(!presence.is_online());
        assert_eq!(presence.last_seen.unwrap().title_name, "Forza");
    }

    #[test]
    fn test_presence_null_fields_default() {
        let json = r#"{
            "xuid": "1",
            "state": null,
            "devices": [{"type": null, "titles": [{"id": "1", "name": null, "lastModified": null}]}],
            "lastSeen": null
        }"#;
        let presence: Presence = serde_json::from_str(json).unwrap();
        assert!(!presence.is_online());
        assert_eq!(presence.devices[0].device_type, "");
        assert_eq!(presence.devices[0].titles[0].name, "");
        assert!(presence.last_seen.is_none());

        let presence: Presence =
            serde_json::from_str(r#"{"xuid": "1", "state": "Online", "devices": null}"#).unwrap();
        assert!(presence.is_online());
        assert!(presence.devices.is_empty());
    }
}
