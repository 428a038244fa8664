use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize)]
pub(crate) struct SourcesEnvelope {
    pub(crate) sources: Option<Vec<Map<String, Value>>>,
}
