mod api;
mod model;
mod wire;

pub use model::{Article, ArticleSource, Headlines};

use crate::core::params::ALL;
use crate::{NewsClient, NewsError};

/// Default number of articles per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

impl NewsClient {
    /// Fetches live top headlines.
    ///
    /// `country`, `category` and `sources` accept [`ALL`] to disable the filter;
    /// `q` is a free-text search term.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Validation`] before any request if `country` or `category`
    /// is not in its allow-list, or any error from [`request`](NewsClient::request).
    #[tracing::instrument(skip(self))]
    pub fn top_headlines(
        &self,
        country: &str,
        category: &str,
        sources: &str,
        q: Option<&str>,
        page_size: u32,
        page: u32,
    ) -> Result<Headlines, NewsError> {
        api::fetch_headlines(
            self,
            &api::HeadlinesQuery {
                country,
                category,
                sources,
                q,
                page_size,
                page,
            },
        )
    }

    /// Starts a [`HeadlinesBuilder`] with the default filters.
    pub fn headlines(&self) -> HeadlinesBuilder {
        HeadlinesBuilder::new(self)
    }
}

/// A builder for the `top-headlines` endpoint.
///
/// Defaults: every filter [`ALL`], no search term, 20 articles, first page.
#[derive(Debug, Clone)]
pub struct HeadlinesBuilder {
    client: NewsClient,
    country: String,
    category: String,
    sources: String,
    q: Option<String>,
    page_size: u32,
    page: u32,
}

impl HeadlinesBuilder {
    /// Creates a new `HeadlinesBuilder` with no filters applied.
    pub fn new(client: &NewsClient) -> Self {
        Self {
            client: client.clone(),
            country: ALL.to_string(),
            category: ALL.to_string(),
            sources: ALL.to_string(),
            q: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }

    /// Restricts results to one country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Restricts results to one category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Comma-separated source ids (see [`Source::id`](crate::Source::id)).
    #[must_use]
    pub fn sources(mut self, sources: impl Into<String>) -> Self {
        self.sources = sources.into();
        self
    }

    /// Keywords or a phrase to search for.
    #[must_use]
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Sets the number of articles per page.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(mut self, n: u32) -> Self {
        self.page = n;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// See [`NewsClient::top_headlines`].
    pub fn fetch(self) -> Result<Headlines, NewsError> {
        self.client.top_headlines(
            &self.country,
            &self.category,
            &self.sources,
            self.q.as_deref(),
            self.page_size,
            self.page,
        )
    }
}
