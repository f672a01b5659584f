//! Wire types for DVR responses (REST).

use super::{ContentSegment, DvrCapture, DvrPrivacy};
use crate::http::PageEnvelope;
use crate::shared::serde_util::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET dvr/gameclips` page.
pub type ClipsResponse = PageEnvelope<ClipResponse>;

/// `GET dvr/screenshots` page.
pub type ScreenshotsResponse = PageEnvelope<ScreenshotResponse>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipResponse {
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
#[serde(rename_all = "camelCase")]
pub struct ScreenshotResponse {
    #[serde(flatten)]
    pub capture: DvrCapture,
    /// Screenshots carry their upload time here instead of `uploadDate`.
    #[serde(default)]
    pub date_uploaded: Option<DateTime<Utc>>,
}

/// `POST dvr/privacy` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyRequest {
    pub value: DvrPrivacy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clips_page_deserialize() {
        let json = r#"{
            "continuationToken": "abc",
            "values": [{
                "contentId": "clip-1",
                "contentLocators": [
                    {"locatorType": "Download", "uri": "https://clips.example/1.mp4", "fileSize": 1048576},
                    {"locatorType": "Thumbnail_Small", "uri": "https://clips.example/1.png"}
                ],
                "creationType": "UserGenerated",
                "ownerXuid": 2533274793093971,
                "resolutionHeight": 1080,
                "resolutionWidth": 1920,
                "titleId": 219630713,
                "titleName": "Halo Infinite",
                "uploadDate": "2024-01-15T10:30:00Z",
                "likeCount": 4,
                "sharedTo": [],
                "contentSegments": [{
                    "segmentId": 1,
                    "creationType": "UserGenerated",
                    "creatorChannelId": null,
                    "creatorXuid": 2533274793093971,
                    "recordDate": "2024-01-15T10:29:30Z",
                    "durationInSeconds": 30,
                    "offset": 0,
                    "secondaryTitleId": null,
                    "titleId": 219630713
                }],
                "durationInSeconds": 30,
                "frameRate": 60
            }]
        }"#;
        let page: ClipsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.continuation_token.unwrap().as_str(), "abc");

        let clip = &page.values[0];
        assert_eq!(clip.capture.content_id, "clip-1");
        assert_eq!(clip.capture.owner_xuid.as_str(), "2533274793093971");
        assert_eq!(clip.capture.resolution_width, 1920);
        assert_eq!(clip.capture.content_locators[0].file_size, Some(1048576));
        assert_eq!(
            clip.capture.upload_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(clip.content_segments[0].creator_xuid.as_str(), "2533274793093971");
        assert_eq!(clip.duration_in_seconds, 30);
        assert_eq!(clip.frame_rate, 60);
    }

    #[test]
    fn test_screenshot_date_uploaded() {
        let json = r#"{
            "values": [{
                "contentId": "shot-1",
                "dateUploaded": "2024-02-01T08:00:00Z",
                "contentLocators": [{
                    "locatorType": "Download",
                    "uri": "https://shots.example/1.png",
                    "expiration": "2024-02-02T08:00:00Z"
                }]
            }]
        }"#;
        let page: ScreenshotsResponse = serde_json::from_str(json).unwrap();
        assert!(page.continuation_token.is_none());
        let shot = &page.values[0];
        assert_eq!(
            shot.date_uploaded,
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap())
        );
        assert!(shot.capture.upload_date.is_none());
        assert!(shot.capture.content_locators[0].expiration.is_some());
    }

    #[test]
    fn test_privacy_request_wire_shape() {
        let body = PrivacyRequest {
            value: DvrPrivacy::PeopleOnMyList,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"value": "PeopleOnMyList"})
        );
    }

    #[test]
    fn test_clip_null_fields_default() {
        let json = r#"{
            "continuationToken": null,
            "values": [{
                "contentId": "clip-1",
                "greatestMomentId": null,
                "contentLocators": [{"locatorType": null, "uri": "https://clips.example/1.mp4", "fileSize": null}],
                "ownerXuid": null,
                "resolutionHeight": null,
                "titleId": null,
                "likeCount": null,
                "sharedTo": null,
                "sessions": null,
                "uploadDate": null,
                "contentSegments": [{"segmentId": null, "creatorXuid": null, "recordDate": null}],
                "durationInSeconds": null,
                "frameRate": null
            }]
        }"#;
        let page: ClipsResponse = serde_json::from_str(json).unwrap();
        assert!(page.continuation_token.is_none());

        let clip = &page.values[0];
        assert_eq!(clip.capture.content_id, "clip-1");
        assert_eq!(clip.capture.greatest_moment_id, "");
        assert_eq!(clip.capture.content_locators[0].locator_type, "");
        assert!(clip.capture.content_locators[0].file_size.is_none());
        assert!(clip.capture.owner_xuid.is_empty());
        assert_eq!(clip.capture.resolution_height, 0);
        assert_eq!(clip.capture.title_id, 0);
        assert_eq!(clip.capture.like_count, 0);
        assert!(clip.capture.shared_to.is_empty());
        assert!(clip.capture.sessions.is_empty());
        assert!(clip.capture.upload_date.is_none());
        assert_eq!(clip.content_segments[0].segment_id, 0);
        assert_eq!(clip.duration_in_seconds, 0);
        assert_eq!(clip.frame_rate, 0);
    }

    #[test]
    fn test_screenshot_null_fields_default() {
        let json = r#"{"values": [{
            "contentId": "shot-1",
            "dateUploaded": null,
            "userCaption": null,
            "viewCount": null,
            "contentLocators": null
        }]}"#;
        let page: ScreenshotsResponse = serde_json::from_str(json).unwrap();
        let shot = &page.values[0];
        assert!(shot.date_uploaded.is_none());
        assert_eq!(shot.capture.user_caption, "");
        assert_eq!(shot.capture.view_count, 0);
        assert!(shot.capture.content_locators.is_empty());
    }
}
