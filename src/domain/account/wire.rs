//! Wire types for account and gamertag responses (REST).

use super::settings::RawSetting;
use crate::http::Collection;
use crate::shared::serde_util::null_as_default;
use crate::shared::Xuid;
use serde::{Deserialize, Serialize};

/// `GET account` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_users: Vec<ProfileUserResponse>,
}

impl Collection for AccountResponse {
    type Item = ProfileUserResponse;

    fn into_items(self) -> Vec<ProfileUserResponse> {
        self.profile_users
    }
}

/// One entry of `profileUsers`, before settings projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUserResponse {
    #[serde(default)]
    pub id: Xuid,
    #[serde(default)]
    pub host_id: Xuid,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_sponsored_user: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: Vec<RawSetting>,
}

/// `POST generate/gamertag` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateGamertagRequest {
    pub algorithm: u32,
    pub count: u32,
    pub seed: String,
    pub locale: String,
}

impl GenerateGamertagRequest {
    pub fn new(count: u32) -> Self {
        Self {
            algorithm: 1,
            count,
            seed: String::new(),
            locale: "en-US".to_string(),
        }
    }
}

/// `POST generate/gamertag` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedGamertagsResponse {
    #[serde(rename = "Gamertags", default, deserialize_with = "null_as_default")]
    pub gamertags: Vec<String>,
}

impl Collection for GeneratedGamertagsResponse {
    type Item = String;

    fn into_items(self) -> Vec<String> {
        self.gamertags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_wire_shape() {
        let json = serde_json::to_value(GenerateGamertagRequest::new(3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"algorithm": 1, "count": 3, "seed": "", "locale": "en-US"})
        );
    }

    #[test]
    fn test_generate_request_survives_echo() {
        let request = GenerateGamertagRequest {
            algorithm: 1,
            count: u32::MAX,
            seed: "séed ✓".to_string(),
            locale: "en-GB".to_string(),
        };
        let echoed: GenerateGamertagRequest =
            serde_json::from_slice(&serde_json::to_vec(&request).unwrap()).unwrap();
        assert_eq!(echoed, request);
    }

    #[test]
    fn test_account_response_deserialize() {
        let json = r#"{
            "profileUsers": [{
                "id": "2533274793093971",
                "hostId": "2533274793093971",
                "settings": [
                    {"id": "Gamertag", "value": "Major Nelson"},
                    {"id": "Gamerscore", "value": "9001"}
                ],
                "isSponsoredUser": false
            }]
        }"#;
        let resp: AccountResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.profile_users.len(), 1);
        let user = &resp.profile_users[0];
        assert_eq!(user.id.as_str(), "2533274793093971");
        assert_eq!(user.settings[1], RawSetting::new("Gamerscore", "9001"));
    }

    #[test]
    fn test_account_response_null_fields_default() {
        let json = r#"{
            "profileUsers": [{
                "id": "1",
                "hostId": null,
                "isSponsoredUser": null,
                "settings": [{"id": "Bio", "value": null}]
            }]
        }"#;
        let resp: AccountResponse = serde_json::from_str(json).unwrap();
        let user = &resp.profile_users[0];
        assert!(user.host_id.is_empty());
        assert!(!user.is_sponsored_user);
        assert_eq!(user.settings[0], RawSetting::new("Bio", ""));

        let resp: AccountResponse = serde_json::from_str(r#"{"profileUsers": null}"#).unwrap();
        assert!(resp.profile_users.is_empty());
    }
}
