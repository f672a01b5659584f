//! Account sub-client: profile and gamertag generation.

use crate::client::XblClient;
use crate::domain::account::wire::{
    AccountResponse, GenerateGamertagRequest, GeneratedGamertagsResponse,
};
use crate::domain::account::Account;
use crate::error::SdkError;
use crate::http::HttpMethod;

pub struct Accounts<'a> {
    pub(crate) client: &'a XblClient,
}

impl<'a> Accounts<'a> {
    /// Get the signed-in user's profile with its settings projected.
    pub async fn get(&self) -> Result<Account, SdkError> {
        let users = self
            .client
            .http
            .fetch_collection::<AccountResponse, ()>(HttpMethod::Get, "account", None, "account")
            .await?;

        let user = users
            .into_iter()
            .next()
            .ok_or_else(|| SdkError::NotFound("account".to_string()))?;
        Ok(Account::try_from(user)?)
    }

    /// Ask the server for `quantity` gamertag suggestions.
    pub async fn generate_gamertags(&self, quantity: u32) -> Result<Vec<String>, SdkError> {
        if quantity == 0 {
            return Err(SdkError::InvalidInput(
                "gamertag quantity must be positive".to_string(),
            ));
        }

        let request = GenerateGamertagRequest::new(quantity);
        self.client
            .http
            .fetch_collection::<GeneratedGamertagsResponse, _>(
                HttpMethod::Post,
                "generate/gamertag",
                Some(&request),
                "generated gamertags",
            )
            .await
    }
}
