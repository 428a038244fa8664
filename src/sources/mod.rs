mod api;
mod model;
mod wire;

pub use model::{Source, SourceFields, SourcesInfo};

use serde_json::{Map, Value};

use crate::core::params::ALL;
use crate::{NewsClient, NewsError};

impl NewsClient {
    /// Lists the publishers matching the given filters.
    ///
    /// Pass [`ALL`] for any filter that should not be applied.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Validation`] before any request if a filter is not in its
    /// allow-list, or any error from [`request`](NewsClient::request).
    #[tracing::instrument(skip(self))]
    pub fn sources(
        &self,
        category: &str,
        language: &str,
        country: &str,
    ) -> Result<Vec<Source>, NewsError> {
        api::fetch(self, category, language, country)
    }

    /// Like [`sources`](NewsClient::sources), but returns the records exactly as decoded.
    ///
    /// # Errors
    ///
    /// Same as [`sources`](NewsClient::sources).
    pub fn sources_raw(
        &self,
        category: &str,
        language: &str,
        country: &str,
    ) -> Result<Vec<Map<String, Value>>, NewsError> {
        api::fetch_raw(self, category, language, country)
    }

    /// Fetches sources and keeps only the requested fields of each record.
    ///
    /// A single field name yields [`SourcesInfo::Values`]; a list of names yields
    /// [`SourcesInfo::Records`]. Order follows the source list.
    ///
    /// ```no_run
    /// use newsapi_rs::{ALL, NewsClient};
    ///
    /// let client = NewsClient::new("my-api-key");
    /// let ids = client.sources_info("id", ALL, "en", "us")?;
    /// let pairs = client.sources_info(["id", "name"], ALL, "en", "us")?;
    /// assert_eq!(ids.len(), pairs.len());
    /// # Ok::<(), newsapi_rs::NewsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::MissingField`] if a requested field is absent from a record,
    /// or any error from [`sources`](NewsClient::sources).
    #[tracing::instrument(skip(self, fields))]
    pub fn sources_info(
        &self,
        fields: impl Into<SourceFields>,
        category: &str,
        language: &str,
        country: &str,
    ) -> Result<SourcesInfo, NewsError> {
        let records = api::fetch_raw(self, category, language, country)?;
        api::project(&records, &fields.into())
    }

    /// Starts a [`SourcesBuilder`] with every filter set to [`ALL`].
    pub fn sources_builder(&self) -> SourcesBuilder {
        SourcesBuilder::new(self)
    }
}

/// A builder for the `sources` endpoint.
#[derive(Debug, Clone)]
pub struct SourcesBuilder {
    client: NewsClient,
    category: String,
    language: String,
    country: String,
}

impl SourcesBuilder {
    /// Creates a new `SourcesBuilder` with no filters applied.
    pub fn new(client: &NewsClient) -> Self {
        Self {
            client: client.clone(),
            category: ALL.to_string(),
            language: ALL.to_string(),
            country: ALL.to_string(),
        }
    }

    /// Restricts results to one category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Restricts results to one language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Restricts results to one country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// See [`NewsClient::sources`].
    pub fn fetch(self) -> Result<Vec<Source>, NewsError> {
        api::fetch(&self.client, &self.category, &self.language, &self.country)
    }

    /// Executes the request and projects each record onto `fields`.
    ///
    /// # Errors
    ///
    /// See [`NewsClient::sources_info`].
    pub fn fetch_info(self, fields: impl Into<SourceFields>) -> Result<SourcesInfo, NewsError> {
        self.client
            .sources_info(fields, &self.category, &self.language, &self.country)
    }
}
