use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A news publisher indexed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Identifier usable in the `sources` filter of `top-headlines` (e.g. `bbc-news`).
    pub id: String,
    /// Display name of the publisher.
    pub name: String,
    /// A short description of the publisher.
    #[serde(default)]
    pub description: Option<String>,
    /// Homepage of the publisher.
    #[serde(default)]
    pub url: Option<String>,
    /// Category token, as listed in [`ALLOWED_CATEGORY`](crate::ALLOWED_CATEGORY).
    #[serde(default)]
    pub category: Option<String>,
    /// Language code of the publisher's content.
    #[serde(default)]
    pub language: Option<String>,
    /// Country code of the publisher.
    #[serde(default)]
    pub country: Option<String>,
}

/// Which fields of each source record [`sources_info`](crate::NewsClient::sources_info) keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFields {
    /// Keep a single field and flatten the result to its values.
    One(String),
    /// Keep several fields, one map per source.
    Many(Vec<String>),
}

impl From<&str> for SourceFields {
    fn from(field: &str) -> Self {
        Self::One(field.to_string())
    }
}

impl From<String> for SourceFields {
    fn from(field: String) -> Self {
        Self::One(field)
    }
}

impl From<&[&str]> for SourceFields {
    fn from(fields: &[&str]) -> Self {
        Self::Many(fields.iter().map(|f| (*f).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SourceFields {
    fn from(fields: [&str; N]) -> Self {
        Self::Many(fields.iter().map(|f| (*f).to_string()).collect())
    }
}

impl From<Vec<&str>> for SourceFields {
    fn from(fields: Vec<&str>) -> Self {
        Self::Many(fields.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for SourceFields {
    fn from(fields: Vec<String>) -> Self {
        Self::Many(fields)
    }
}

/// The projection produced by [`sources_info`](crate::NewsClient::sources_info).
///
/// Both variants keep the order of the underlying source list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourcesInfo {
    /// One value per source, for a single requested field.
    Values(Vec<Value>),
    /// One map per source holding exactly the requested keys.
    Records(Vec<Map<String, Value>>),
}

impl SourcesInfo {
    /// Number of sources in the projection.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::Records(r) => r.len(),
        }
    }

    /// `true` if the underlying source list was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the flat values, or `None` for a multi-field projection.
    pub fn into_values(self) -> Option<Vec<Value>> {
        match self {
            Self::Values(v) => Some(v),
            Self::Records(_) => None,
        }
    }

    /// Returns the per-source maps, or `None` for a single-field projection.
    pub fn into_records(self) -> Option<Vec<Map<String, Value>>> {
        match self {
            Self::Records(r) => Some(r),
            Self::Values(_) => None,
        }
    }
}
