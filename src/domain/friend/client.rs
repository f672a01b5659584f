//! Friends sub-client.

use crate::client::XblClient;
use crate::domain::friend::wire::FriendsResponse;
use crate::domain::friend::Friend;
use crate::error::SdkError;
use crate::http::HttpMethod;

pub struct Friends<'a> {
    pub(crate) client: &'a XblClient,
}

impl<'a> Friends<'a> {
    /// All friends of the signed-in user.
    pub async fn get(&self) -> Result<Vec<Friend>, SdkError> {
        self.client
            .http
            .fetch_collection::<FriendsResponse, ()>(HttpMethod::Get, "friends", None, "friends")
            .await
    }
}
