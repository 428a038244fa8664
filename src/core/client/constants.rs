//! Centralized constants for default endpoints and UA.

/// Default User-Agent sent with every request.
pub(crate) const USER_AGENT: &str = concat!("newsapi-rs/", env!("CARGO_PKG_VERSION"));

/// newsapi.org v2 base (endpoint names are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Endpoint listing the publishers the API indexes.
pub(crate) const ENDPOINT_SOURCES: &str = "sources";

/// Endpoint returning live top headlines.
pub(crate) const ENDPOINT_TOP_HEADLINES: &str = "top-headlines";

/// Environment variable consulted by `NewsClient::from_env`.
pub(crate) const API_KEY_ENV: &str = "NEWSAPI_KEY";

/// Name of the query parameter carrying the API key.
pub(crate) const API_KEY_PARAM: &str = "apikey";

/// `tracing` target used for request logging.
pub(crate) const LOG_TARGET: &str = "newsapi::client";
