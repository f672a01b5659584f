//! Conversions from wire types to domain types for DVR captures.

use super::wire::{ClipResponse, ScreenshotResponse};
use super::{CaptureType, Clip, Screenshot};

impl From<ClipResponse> for Clip {
    fn from(c: ClipResponse) -> Self {
        let mut capture = c.capture;
        capture.capture_type = Some(CaptureType::Clip);
        Self {
            capture,
            content_segments: c.content_segments,
            duration_in_seconds: c.duration_in_seconds,
            frame_rate: c.frame_rate,
        }
    }
}

impl From<ScreenshotResponse> for Screenshot {
    fn from(s: ScreenshotResponse) -> Self {
        let mut capture = s.capture;
        capture.capture_type = Some(CaptureType::Screenshot);
        if s.date_uploaded.is_some() {
            capture.upload_date = s.date_uploaded;
        }
        Self { capture }
    }
}
