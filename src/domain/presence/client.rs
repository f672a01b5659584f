//! Presence sub-client: presence for specific users or for all friends.

use crate::client::XblClient;
use crate::domain::presence::Presence;
use crate::error::SdkError;
use crate::http::HttpMethod;

pub struct Presences<'a> {
    pub(crate) client: &'a XblClient,
}

impl<'a> Presences<'a> {
    /// Presence for each of `xuids`, in one call.
    pub async fn users<S: AsRef<str>>(&self, xuids: &[S]) -> Result<Vec<Presence>, SdkError> {
        if xuids.is_empty() {
            return Err(SdkError::InvalidInput("missing xbox ID".to_string()));
        }
        if xuids.iter().any(|x| x.as_ref().is_empty()) {
            return Err(SdkError::InvalidInput("empty xbox ID".to_string()));
        }

        let ids: Vec<String> = xuids
            .iter()
            .map(|x| urlencoding::encode(x.as_ref()).into_owned())
            .collect();
        let path = format!("{}/presence", ids.join(","));

        self.client
            .http
            .fetch_collection::<Vec<Presence>, ()>(HttpMethod::Get, &path, None, "user presences")
            .await
    }

    /// Presence for every friend of the signed-in user.
    pub async fn friends(&self) -> Result<Vec<Presence>, SdkError> {
        self.client
            .http
            .fetch_collection::<Vec<Presence>, ()>(
                HttpMethod::Get,
                "presence",
                None,
                "friend presences",
            )
            .await
    }
}
