//! Wire types for friend responses (REST).

use super::Friend;
use crate::http::Collection;
use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};

/// `GET friends` envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<Friend>,
}

impl Collection for FriendsResponse {
    type Item = Friend;

    fn into_items(self) -> Vec<Friend> {
        self.people
    }
}
