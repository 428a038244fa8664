//! Public client surface + builder.
//! Defaults (base URL, UA, endpoint names) live in `constants`.

pub(crate) mod constants;

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::core::net::{self, encode_query, encode_value, redact_api_key, url_join};
use crate::core::wire::ErrorEnvelope;
use crate::core::NewsError;
use constants::{API_KEY_ENV, API_KEY_PARAM, DEFAULT_BASE_URL, LOG_TARGET, USER_AGENT};

/// A blocking client for the newsapi.org v2 API.
///
/// The client only holds its configuration and a connection pool; it is cheap
/// to clone and safe to share between threads. Every call blocks until the
/// HTTP round trip completes.
///
/// # Example
///
/// ```no_run
/// use newsapi_rs::{ALL, NewsClient};
///
/// let client = NewsClient::new("my-api-key");
/// let sources = client.sources("business", "en", ALL)?;
/// for s in sources {
///     println!("{}: {}", s.name, s.url.unwrap_or_default());
/// }
/// # Ok::<(), newsapi_rs::NewsError>(())
/// ```
#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NewsClient {
    /// Creates a client for `api_key` against the public API base URL.
    ///
    /// No network call is made.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = default_http(None, None, USER_AGENT).unwrap_or_else(|_| Client::new());
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /// Creates a client whose API key is read from the `NEWSAPI_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::MissingApiKey`] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, NewsError> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::builder().api_key(key).build()
    }

    /// The base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends the `apikey` parameter to an existing query string.
    ///
    /// An empty input yields just `apikey=<key>`; otherwise the pair is appended
    /// after a `&`.
    pub fn add_api_key_param(&self, query_string: &str) -> String {
        let pair = format!("{API_KEY_PARAM}={}", encode_value(&self.api_key));
        if query_string.is_empty() {
            pair
        } else {
            format!("{query_string}&{pair}")
        }
    }

    /// Sends a GET request to `endpoint` and returns the decoded JSON body.
    ///
    /// Parameters whose value is `None`, empty or [`ALL`](crate::ALL) are left out
    /// of the query string; the others are percent-encoded. The API key is always
    /// appended last.
    ///
    /// # Errors
    ///
    /// - [`NewsError::Http`] if the request could not be sent or the body could not be read.
    /// - [`NewsError::Json`] if the body is not valid JSON, whatever the status.
    /// - [`NewsError::Api`] if the status is not `200`; `code` and `message` come from the body.
    pub fn request<I, K, V>(&self, endpoint: &str, params: I) -> Result<Value, NewsError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let query = encode_query(params);
        let full_query = self.add_api_key_param(&query);
        let url = url_join(&self.base_url, &[endpoint], &full_query);
        let shown = redact_api_key(&url);

        tracing::debug!(target: LOG_TARGET, url = %shown, "sending request");
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        // Only successful bodies may be recorded as fixtures.
        let text = if status == StatusCode::OK {
            net::get_text(resp, endpoint, &query)?
        } else {
            resp.text()?
        };
        let body: Value = serde_json::from_str(&text)?;

        if status == StatusCode::OK {
            tracing::info!(target: LOG_TARGET, "Request to '{shown}' was successful!");
            return Ok(body);
        }

        let err = ErrorEnvelope::from_value(&body);
        let code = err.code.unwrap_or_default();
        let message = err.message.unwrap_or_default();
        tracing::error!(target: LOG_TARGET, "Status code: {}", status.as_u16());
        tracing::error!(target: LOG_TARGET, "'{code}': '{message}'");
        Err(NewsError::Api {
            status: status.as_u16(),
            code,
            message,
            url: shown,
        })
    }
}

fn default_http(
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    // The blocking client defaults to a 30s timeout; `None` makes the wait unbounded.
    let mut httpb = Client::builder().user_agent(user_agent).timeout(timeout);
    if let Some(ct) = connect_timeout {
        httpb = httpb.connect_timeout(ct);
    }
    httpb.build()
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`NewsClient`].
#[derive(Default)]
pub struct NewsClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl fmt::Debug for NewsClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl NewsClientBuilder {
    /// Sets the API key sent with every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base (e.g., `https://newsapi.org/v2`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::MissingApiKey`] if no non-empty key was set,
    /// [`NewsError::Url`] if the default base URL cannot be parsed, or
    /// [`NewsError::Http`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(NewsError::MissingApiKey)?;
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let http = default_http(
            self.timeout,
            self.connect_timeout,
            self.user_agent.as_deref().unwrap_or(USER_AGENT),
        )?;

        Ok(NewsClient {
            http,
            api_key,
            base_url: base_url.as_str().to_string(),
        })
    }
}
