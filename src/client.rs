//! High-level client: `XblClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::account::client::Accounts;
use crate::domain::alert::client::Alerts;
use crate::domain::dvr::client::Dvr;
use crate::domain::friend::client::Friends;
use crate::domain::presence::client::Presences;
use crate::error::SdkError;
use crate::http::{Transport, XblHttp};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountClient;
pub use crate::domain::alert::client::Alerts as AlertsClient;
pub use crate::domain::dvr::client::Dvr as DvrClient;
pub use crate::domain::friend::client::Friends as FriendsClient;
pub use crate::domain::presence::client::Presences as PresenceClient;

/// The primary entry point for the OpenXBL SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.account()`, `client.dvr()`, etc. Cloning is cheap; clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct XblClient {
    pub(crate) http: XblHttp,
}

impl XblClient {
    pub fn builder() -> XblClientBuilder {
        XblClientBuilder::default()
    }

    /// Client against the default endpoint with the default transport.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        Self::builder().api_key(api_key).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn account(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn presence(&self) -> Presences<'_> {
        Presences { client: self }
    }

    pub fn alerts(&self) -> Alerts<'_> {
        Alerts { client: self }
    }

    pub fn friends(&self) -> Friends<'_> {
        Friends { client: self }
    }

    pub fn dvr(&self) -> Dvr<'_> {
        Dvr { client: self }
    }

    /// The underlying request pipeline, for endpoints without a sub-client.
    pub fn http(&self) -> &XblHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct XblClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for XblClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }
}

impl XblClientBuilder {
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<XblClient, SdkError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::InvalidInput("API key is required".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(SdkError::InvalidInput("API key is empty".to_string()));
        }
        if !api_key.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            return Err(SdkError::InvalidInput(
                "API key must be printable ASCII".to_string(),
            ));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SdkError::InvalidInput(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(XblClient {
            http: XblHttp::new(&self.base_url, &api_key, self.timeout, transport),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    let transport = crate::http::ReqwestTransport::new()
        .map_err(|e| crate::error::HttpError::InvalidRequest(e.to_string()))?;
    Ok(Arc::new(transport))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::InvalidInput(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::ScriptedTransport;

    #[test]
    fn test_builder_requires_api_key() {
        let err = XblClient::builder()
            .transport(ScriptedTransport::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidInput(_)));
    }

    #[test]
    fn test_builder_rejects_blank_or_multiline_key() {
        for key in ["", "   ", "abc\ndef"] {
            let err = XblClient::builder()
                .api_key(key)
                .transport(ScriptedTransport::new())
                .build()
                .unwrap_err();
            assert!(matches!(err, SdkError::InvalidInput(_)), "key {key:?}");
        }
    }

    #[test]
    fn test_builder_rejects_non_http_base_url() {
        let err = XblClient::builder()
            .api_key("key")
            .base_url("ftp://xbl.io")
            .transport(ScriptedTransport::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidInput(_)));
    }

    #[test]
    fn test_builder_defaults() {
        let client = XblClient::builder()
            .api_key("key")
            .transport(ScriptedTransport::new())
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "https://xbl.io/api/v2/");
        assert_eq!(client.http().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_builder_custom_base_url_and_timeout() {
        let client = XblClient::builder()
            .api_key("key")
            .base_url("http://127.0.0.1:8080/api")
            .timeout(Duration::from_secs(3))
            .transport(ScriptedTransport::new())
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:8080/api/");
        assert_eq!(client.http().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let client = XblClient::builder()
            .api_key("super-secret")
            .transport(ScriptedTransport::new())
            .build()
            .unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }
}
