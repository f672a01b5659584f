//! Network constants for the OpenXBL API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://xbl.io/api/v2/";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Authorization";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
