use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request parameter is not part of its allow-list.
    ///
    /// Raised before any network call is made.
    #[error("{param} should be one of {allowed:?}, got '{value}'")]
    Validation {
        /// The name of the offending parameter (e.g. `country`).
        param: &'static str,
        /// The rejected value.
        value: String,
        /// The accepted tokens for this parameter.
        allowed: &'static [&'static str],
    },

    /// The API answered with a non-200 status.
    ///
    /// `code` and `message` are taken from the JSON error body when present.
    #[error("API error {status} at {url}: '{code}': '{message}'")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The API's machine-readable error code (e.g. `apiKeyInvalid`).
        code: String,
        /// The API's human-readable error message.
        message: String,
        /// The URL that returned the error, with the API key redacted.
        url: String,
    },

    /// A field requested from a source record does not exist in that record.
    #[error("field '{field}' is missing from source record")]
    MissingField {
        /// The requested field name.
        field: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No API key was configured on the client builder.
    #[error("an API key is required (set it on the builder or via NEWSAPI_KEY)")]
    MissingApiKey,
}
