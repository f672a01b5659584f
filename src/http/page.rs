//! Continuation-token pagination.
//!
//! The server pages large result sets behind an opaque `continuationToken`.
//! The protocol is stateless: the caller passes the token from the previous
//! page back in and stops once a page comes back without one.

use crate::error::SdkError;
use crate::http::client::{non_empty, Collection, XblHttp};
use crate::shared::serde_util;
use crate::shared::ContinuationToken;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;

/// Name of the query parameter carrying the cursor.
pub const CONTINUATION_PARAM: &str = "continuationToken";

/// One page of results plus the cursor for the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` once the server has no more pages.
    pub next: Option<ContinuationToken>,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
        }
    }
}

/// Wire envelope shared by every paginated endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageEnvelope<T> {
    #[serde(default, deserialize_with = "serde_util::empty_token_as_none::deserialize")]
    pub continuation_token: Option<ContinuationToken>,
    #[serde(default = "Vec::new", deserialize_with = "serde_util::null_as_default")]
    pub values: Vec<T>,
}

impl<T> Default for PageEnvelope<T> {
    fn default() -> Self {
        Self {
            continuation_token: None,
            values: Vec::new(),
        }
    }
}

impl<T: DeserializeOwned> Collection for PageEnvelope<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self.values
    }
}

/// Append the cursor to `base_path` when there is one.
pub fn with_continuation(base_path: &str, token: Option<&ContinuationToken>) -> String {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => {
            let sep = if base_path.contains('?') { '&' } else { '?' };
            format!(
                "{}{}{}={}",
                base_path,
                sep,
                CONTINUATION_PARAM,
                urlencoding::encode(token.as_str())
            )
        }
        None => base_path.to_string(),
    }
}

impl XblHttp {
    /// Fetch one page of `base_path`.
    ///
    /// An empty page is [`SdkError::NotFound`], the same as any other empty
    /// collection; on the first page this cannot be told apart from "no data".
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        base_path: &str,
        token: Option<&ContinuationToken>,
        resource: &str,
    ) -> Result<Page<T>, SdkError> {
        let path = with_continuation(base_path, token);
        let envelope: PageEnvelope<T> = self.get(&path).await?;
        let next = envelope.continuation_token;
        let items = non_empty(envelope.values, resource)?;
        Ok(Page { items, next })
    }

    /// Walk every page of `base_path`, starting from the first.
    ///
    /// The first page follows the not-found policy. A later page that comes
    /// back empty ends the walk with whatever was already collected, as does
    /// a cursor the server already handed out earlier in the walk.
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        base_path: &str,
        resource: &str,
    ) -> Result<Vec<T>, SdkError> {
        let mut items = Vec::new();
        let mut token: Option<ContinuationToken> = None;
        let mut seen: HashSet<ContinuationToken> = HashSet::new();
        let mut pages = 0usize;

        loop {
            match self.fetch_page::<T>(base_path, token.as_ref(), resource).await {
                Ok(page) => {
                    pages += 1;
                    items.extend(page.items);
                    match page.next {
                        Some(next) if !seen.insert(next.clone()) => {
                            tracing::warn!(
                                resource,
                                pages,
                                token = %next,
                                "Server repeated a continuation token, stopping"
                            );
                            break;
                        }
                        Some(next) => token = Some(next),
                        None => break,
                    }
                }
                Err(err) if err.is_not_found() && token.is_some() => {
                    tracing::debug!(
                        resource,
                        pages,
                        "Empty page after continuation token, stopping"
                    );
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(resource, pages, items = items.len(), "Collected all pages");
        Ok(items)
    }
}
