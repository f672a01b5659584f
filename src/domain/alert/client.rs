//! Alerts sub-client.

use crate::client::XblClient;
use crate::domain::alert::wire::AlertsResponse;
use crate::domain::alert::Alert;
use crate::error::SdkError;
use crate::http::HttpMethod;

pub struct Alerts<'a> {
    pub(crate) client: &'a XblClient,
}

impl<'a> Alerts<'a> {
    pub async fn get(&self) -> Result<Vec<Alert>, SdkError> {
        self.client
            .http
            .fetch_collection::<AlertsResponse, ()>(HttpMethod::Get, "alerts", None, "alerts")
            .await
    }
}
