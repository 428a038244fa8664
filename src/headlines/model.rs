use chrono::{DateTime, Utc};
use serde::Serialize;

/// A page of top headlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headlines {
    /// The `status` reported by the API (`ok` on success).
    pub status: String,
    /// Total number of matching articles across all pages.
    pub total_results: u64,
    /// The articles on this page, in the order the API returned them.
    pub articles: Vec<Article>,
}

/// The publisher an article came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSource {
    /// Source identifier; `None` for publishers without a listed source.
    pub id: Option<String>,
    /// Display name of the publisher.
    pub name: String,
}

/// A single headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The publisher of the article.
    pub source: ArticleSource,
    /// Byline, when the publisher provides one.
    pub author: Option<String>,
    /// The headline; `None` if the API sent none.
    pub title: Option<String>,
    /// A short summary of the article.
    pub description: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// A link to the article's lead image.
    pub url_to_image: Option<String>,
    /// Publication time; `None` if the API omitted it or sent an unparsable value.
    pub published_at: Option<DateTime<Utc>>,
    /// The first characters of the article body.
    pub content: Option<String>,
}
