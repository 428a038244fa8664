use serde::Deserialize;

/// Error envelope returned by the API alongside a non-200 status.
#[derive(Deserialize, Default)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) message: Option<String>,
}

impl ErrorEnvelope {
    /// Extracts `code`/`message` from an already decoded body, tolerating bodies
    /// that are not objects.
    pub(crate) fn from_value(body: &serde_json::Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }
}
