//! DVR domain: game clips, screenshots, and capture privacy.
//!
//! One capture schema is used for both kinds of capture. Screenshots report
//! their upload time as `dateUploaded`; it is normalized into
//! [`DvrCapture::upload_date`] during conversion.

pub mod client;
mod convert;
pub mod wire;

use crate::error::SdkError;
use crate::shared::Xuid;
use crate::shared::serde_util::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ─── CaptureType ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureType {
    Clip,
    Screenshot,
}

// ─── DvrPrivacy ──────────────────────────────────────────────────────────────

/// Who may see the user's captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DvrPrivacy {
    Blocked,
    Everyone,
    PeopleOnMyList,
}

impl DvrPrivacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DvrPrivacy::Blocked => "Blocked",
            DvrPrivacy::Everyone => "Everyone",
            DvrPrivacy::PeopleOnMyList => "PeopleOnMyList",
        }
    }
}

impl fmt::Display for DvrPrivacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DvrPrivacy {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blocked" => Ok(DvrPrivacy::Blocked),
            "Everyone" => Ok(DvrPrivacy::Everyone),
            "PeopleOnMyList" => Ok(DvrPrivacy::PeopleOnMyList),
            other => Err(SdkError::InvalidInput(format!(
                "invalid privacy type: {:?}",
                other
            ))),
        }
    }
}

// ─── DvrCapture ──────────────────────────────────────────────────────────────

/// Fields shared by clips and screenshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DvrCapture {
    #[serde(deserialize_with = "null_as_default")]
    pub content_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_locators: Vec<ContentLocator>,
    /// E.g. `UserGenerated`.
    #[serde(deserialize_with = "null_as_default")]
    pub creation_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub greatest_moment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_id: String,
    pub owner_xuid: Xuid,
    #[serde(deserialize_with = "null_as_default")]
    pub resolution_height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub resolution_width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub sandbox_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shared_to: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub title_data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title_name: String,
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_title_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub upload_device_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_caption: String,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub share_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enforcement_state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub safety_threshold: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sessions: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub tournaments: Vec<Value>,
    /// Always set on captures returned by the SDK.
    pub capture_type: Option<CaptureType>,
}

impl DvrCapture {
    /// URI of the first `Download` locator, if any.
    pub fn download_link(&self) -> Option<&str> {
        self.content_locators
            .iter()
            .find(|l| l.locator_type == "Download")
            .map(|l| l.uri.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentLocator {
    /// Screenshots only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub locator_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uri: String,
}

// ─── Clip ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    #[serde(flatten)]
    pub capture: DvrCapture,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_segments: Vec<ContentSegment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_in_seconds: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frame_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentSegment {
    #[serde(deserialize_with = "null_as_default")]
    pub segment_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub creation_type: String,
    pub creator_channel_id: Value,
    pub creator_xuid: Xuid,
    pub record_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_in_seconds: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: i64,
    pub secondary_title_id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub title_id: i64,
}

// ─── Screenshot ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    #[serde(flatten)]
    pub capture: DvrCapture,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_parse() {
        assert_eq!("Blocked".parse::<DvrPrivacy>().unwrap(), DvrPrivacy::Blocked);
        assert_eq!("Everyone".parse::<DvrPrivacy>().unwrap(), DvrPrivacy::Everyone);
        assert_eq!(
            "PeopleOnMyList".parse::<DvrPrivacy>().unwrap(),
            DvrPrivacy::PeopleOnMyList
        );
        for bad in ["", "everyone", "Friends", "Blocked "] {
            assert!(matches!(
                bad.parse::<DvrPrivacy>(),
                Err(SdkError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_privacy_serializes_as_wire_string() {
        for p in [
            DvrPrivacy::Blocked,
            DvrPrivacy::Everyone,
            DvrPrivacy::PeopleOnMyList,
        ] {
            assert_eq!(
                serde_json::to_value(p).unwrap(),
                serde_json::Value::String(p.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_download_link_picks_download_locator() {
        let capture = DvrCapture {
            content_locators: vec![
                ContentLocator {
                    locator_type: "Thumbnail_Small".to_string(),
                    uri: "https://thumb".to_string(),
                    ..Default::default()
                },
                ContentLocator {
                    locator_type: "Download".to_string(),
                    uri: "https://download".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(capture.download_link(), Some("https://download"));
        assert_eq!(DvrCapture::default().download_link(), None);
    }
}
