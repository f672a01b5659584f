//! DVR sub-client: game clips, screenshots, privacy, deletion.

use crate::client::XblClient;
use crate::domain::dvr::wire::{ClipResponse, PrivacyRequest, ScreenshotResponse};
use crate::domain::dvr::{Clip, DvrPrivacy, Screenshot};
use crate::error::SdkError;
use crate::http::{HttpMethod, Page};
use crate::shared::ContinuationToken;

const CLIPS_PATH: &str = "dvr/gameclips";
const SCREENSHOTS_PATH: &str = "dvr/screenshots";

pub struct Dvr<'a> {
    pub(crate) client: &'a XblClient,
}

impl<'a> Dvr<'a> {
    // ── Clips ────────────────────────────────────────────────────────────

    /// One page of the user's game clips. Pass the previous page's `next`
    /// to continue; `None` starts from the beginning.
    pub async fn clips(
        &self,
        continuation: Option<&ContinuationToken>,
    ) -> Result<Page<Clip>, SdkError> {
        let page = self
            .client
            .http
            .fetch_page::<ClipResponse>(CLIPS_PATH, continuation, "game clips")
            .await?;
        Ok(page.map(Clip::from))
    }

    /// Every game clip, following continuation tokens to the end.
    ///
    /// An empty first page is [`SdkError::NotFound`]. An empty later page, or a
    /// continuation token the server already returned, ends the walk and the
    /// clips collected so far are returned without an error.
    pub async fn all_clips(&self) -> Result<Vec<Clip>, SdkError> {
        let clips = self
            .client
            .http
            .fetch_all_pages::<ClipResponse>(CLIPS_PATH, "game clips")
            .await?;
        Ok(clips.into_iter().map(Clip::from).collect())
    }

    /// Delete one game clip by content id.
    pub async fn delete_clip(&self, content_id: &str) -> Result<(), SdkError> {
        if content_id.is_empty() {
            return Err(SdkError::InvalidInput("clip id is empty".to_string()));
        }

        let path = format!(
            "{}/delete/{}",
            CLIPS_PATH,
            urlencoding::encode(content_id)
        );
        self.client
            .http
            .execute_no_content::<()>(HttpMethod::Get, &path, None)
            .await?;
        Ok(())
    }

    // ── Screenshots ──────────────────────────────────────────────────────

    pub async fn screenshots(
        &self,
        continuation: Option<&ContinuationToken>,
    ) -> Result<Page<Screenshot>, SdkError> {
        let page = self
            .client
            .http
            .fetch_page::<ScreenshotResponse>(SCREENSHOTS_PATH, continuation, "screenshots")
            .await?;
        Ok(page.map(Screenshot::from))
    }

    /// Every screenshot, following continuation tokens to the end. Stops the
    /// same way as [`all_clips`](Self::all_clips).
    pub async fn all_screenshots(&self) -> Result<Vec<Screenshot>, SdkError> {
        let shots = self
            .client
            .http
            .fetch_all_pages::<ScreenshotResponse>(SCREENSHOTS_PATH, "screenshots")
            .await?;
        Ok(shots.into_iter().map(Screenshot::from).collect())
    }

    // ── Privacy ──────────────────────────────────────────────────────────

    /// Set who may see the user's captures.
    pub async fn set_privacy(&self, privacy: DvrPrivacy) -> Result<(), SdkError> {
        let request = PrivacyRequest { value: privacy };
        self.client
            .http
            .execute_no_content(HttpMethod::Post, "dvr/privacy", Some(&request))
            .await?;
        Ok(())
    }

    /// Like [`set_privacy`](Self::set_privacy) but takes the wire name.
    /// Unknown names are rejected before any request goes out.
    pub async fn set_privacy_str(&self, value: &str) -> Result<(), SdkError> {
        let privacy: DvrPrivacy = value.parse()?;
        self.set_privacy(privacy).await
    }
}
