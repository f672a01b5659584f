//! Low-level HTTP client: `XblHttp`.
//!
//! Owns the base URL, the API key and the injected [`Transport`]. Every
//! resource call goes through the same pipeline: serialize the body, attach
//! the auth headers, send, classify the status, decode the typed response.
//! Internal to the SDK: the sub-clients in `domain/*/client.rs` wrap this.

use crate::error::{HttpError, SdkError};
use crate::http::transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use crate::network::API_KEY_HEADER;

use futures_util::future::{self, Either};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// A decoded response whose items make up the "primary collection" of a
/// resource call. An empty collection is reported as [`SdkError::NotFound`].
pub trait Collection: DeserializeOwned + Default {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl<T: DeserializeOwned> Collection for Vec<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self
    }
}

/// Low-level HTTP client for the OpenXBL REST API.
#[derive(Clone)]
pub struct XblHttp {
    base_url: String,
    /// Never logged or exposed.
    api_key: String,
    timeout: Duration,
    transport: Arc<dyn Transport>,
}

impl XblHttp {
    /// `base_url` is normalized to end with exactly one `/`.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            timeout,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolve a resource path against the base URL.
    ///
    /// Relative paths are joined onto the base URL. Absolute URLs are only
    /// accepted when they point below the base URL, so the API key never
    /// leaves the configured host.
    pub fn url_for(&self, path: &str) -> Result<String, HttpError> {
        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(HttpError::InvalidRequest(format!(
                "path contains whitespace or control characters: {:?}",
                path
            )));
        }

        if path.starts_with("http://") || path.starts_with("https://") {
            if path.starts_with(&self.base_url) {
                return Ok(path.to_string());
            }
            return Err(HttpError::InvalidRequest(format!(
                "absolute URL {} is outside the API base {}",
                path, self.base_url
            )));
        }

        Ok(format!("{}{}", self.base_url, path.trim_start_matches('/')))
    }

    // ── Transport client ─────────────────────────────────────────────────

    /// Send raw bytes to `path` and return the raw response, whatever its status.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, HttpError> {
        self.send_with_cancel(method, path, body, future::pending::<()>())
            .await
    }

    /// Like [`send`](Self::send), but aborts the exchange as soon as `cancel`
    /// completes. The in-flight transport future is dropped, never decoded.
    pub async fn send_with_cancel<C>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: C,
    ) -> Result<HttpResponse, HttpError>
    where
        C: Future<Output = ()>,
    {
        let url = self.url_for(path)?;

        let mut request = HttpRequest::new(method, url)
            .with_header("Accept", "application/json")
            .with_header("Content-Type", "application/json")
            .with_header(API_KEY_HEADER, self.api_key.as_str())
            .with_timeout(self.timeout);
        if let Some(bytes) = body {
            tracing::trace!(bytes = bytes.len(), "Attaching request body");
            request = request.with_body(bytes);
        }

        tracing::debug!(method = %method, path, "Sending request");

        let exchange = self.transport.execute(request);
        futures_util::pin_mut!(cancel);

        match future::select(exchange, cancel).await {
            Either::Left((Ok(response), _)) => {
                tracing::debug!(
                    method = %method,
                    path,
                    status = response.status,
                    bytes = response.body.len(),
                    "Received response"
                );
                Ok(response)
            }
            Either::Left((Err(TransportError::InvalidRequest(msg)), _)) => {
                Err(HttpError::InvalidRequest(msg))
            }
            Either::Left((Err(TransportError::Network(msg)), _)) => {
                Err(HttpError::Transport(msg))
            }
            Either::Right(((), _)) => {
                tracing::debug!(method = %method, path, "Request cancelled");
                Err(HttpError::Cancelled)
            }
        }
    }

    // ── Request/response pipeline ────────────────────────────────────────

    /// Run the full pipeline and decode the response into `T`.
    ///
    /// An empty response body leaves `T` at its default value.
    pub async fn execute<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.execute_with_cancel(method, path, body, future::pending::<()>())
            .await
    }

    /// Cancellable variant of [`execute`](Self::execute).
    pub async fn execute_with_cancel<T, B, C>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        cancel: C,
    ) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
        C: Future<Output = ()>,
    {
        let response = self.exchange(method, path, body, cancel).await?;
        decode(&response.body)
    }

    /// Run the pipeline for calls that return no meaningful body. Success is
    /// signalled purely by the status.
    pub async fn execute_no_content<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), HttpError>
    where
        B: Serialize + ?Sized,
    {
        self.exchange(method, path, body, future::pending::<()>())
            .await
            .map(|_| ())
    }

    /// Run the pipeline and apply the not-found policy: a response whose
    /// primary collection is empty is an error, never an empty success.
    pub async fn fetch_collection<C, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        resource: &str,
    ) -> Result<Vec<C::Item>, SdkError>
    where
        C: Collection,
        B: Serialize + ?Sized,
    {
        let items = self.execute::<C, B>(method, path, body).await?.into_items();
        non_empty(items, resource)
    }

    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, HttpError> {
        self.execute(HttpMethod::Get, path, None::<&()>).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.execute(HttpMethod::Post, path, Some(body)).await
    }

    /// Serialize, send, and reject non-2xx statuses.
    async fn exchange<B, C>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        cancel: C,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized,
        C: Future<Output = ()>,
    {
        let bytes = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(HttpError::Serialize)?;

        let response = self.send_with_cancel(method, path, bytes, cancel).await?;

        if !response.is_success() {
            return Err(HttpError::Rejected {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response)
    }
}

impl std::fmt::Debug for XblHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XblHttp")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, HttpError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(HttpError::Decode)
}

pub(crate) fn non_empty<T>(items: Vec<T>, resource: &str) -> Result<Vec<T>, SdkError> {
    if items.is_empty() {
        return Err(SdkError::NotFound(resource.to_string()));
    }
    Ok(items)
}
