//! # OpenXBL SDK
//!
//! An async Rust client for the OpenXBL REST API, a proxy in front of
//! Xbox Live authenticated with a single API key.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared newtypes, domain models, settings projection
//! 2. **HTTP API**: `XblHttp` request/response pipeline over a pluggable `Transport`
//! 3. **High-Level Client**: `XblClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use openxbl::prelude::*;
//!
//! let client = XblClient::new("your-api-key")?;
//!
//! let account = client.account().get().await?;
//! println!("{:?} has {:?} gamerscore", account.gamertag, account.gamerscore);
//!
//! let mut token = None;
//! loop {
//!     let page = client.dvr().clips(token.as_ref()).await?;
//!     for clip in &page.items {
//!         println!("{:?}", clip.capture.download_link());
//!     }
//!     match page.next {
//!         Some(next) => token = Some(next),
//!         None => break,
//!     }
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint and header constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Request pipeline, pagination, and the transport seam.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `XblClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ContinuationToken, Xuid};

    // Domain types: account + settings projection
    pub use crate::domain::account::{
        project, Account, RawSetting, SettingId, ACCOUNT_TIER_GOLD, ACCOUNT_TIER_SILVER,
    };

    // Domain types: social
    pub use crate::domain::alert::Alert;
    pub use crate::domain::friend::{Friend, MultiplayerSummary, PreferredColor, SocialManager};
    pub use crate::domain::presence::{Device, LastSeen, Presence, TitlePresence};

    // Domain types: DVR
    pub use crate::domain::dvr::{
        CaptureType, Clip, ContentLocator, ContentSegment, DvrCapture, DvrPrivacy, Screenshot,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError, SettingError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP pipeline + transport seam
    pub use crate::http::{
        HttpMethod, HttpRequest, HttpResponse, Page, Transport, TransportError, XblHttp,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Client + sub-clients
    pub use crate::client::{
        AccountClient, AlertsClient, DvrClient, FriendsClient, PresenceClient, XblClient,
        XblClientBuilder,
    };
}
