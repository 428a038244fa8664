use chrono::{DateTime, Utc};

use crate::core::client::constants::ENDPOINT_TOP_HEADLINES;
use crate::core::params::{validate_category, validate_country};
use crate::core::{NewsClient, NewsError};
use crate::headlines::{
    model::{Article, ArticleSource, Headlines},
    wire,
};

pub(super) struct HeadlinesQuery<'a> {
    pub(super) country: &'a str,
    pub(super) category: &'a str,
    pub(super) sources: &'a str,
    pub(super) q: Option<&'a str>,
    pub(super) page_size: u32,
    pub(super) page: u32,
}

pub(super) fn fetch_headlines(
    client: &NewsClient,
    query: &HeadlinesQuery<'_>,
) -> Result<Headlines, NewsError> {
    validate_country(query.country)?;
    validate_category(query.category)?;

    let page_size = query.page_size.to_string();
    let page = query.page.to_string();
    let body = client.request(
        ENDPOINT_TOP_HEADLINES,
        [
            ("country", Some(query.country)),
            ("category", Some(query.category)),
            ("sources", Some(query.sources)),
            ("q", query.q),
            ("pageSize", Some(page_size.as_str())),
            ("page", Some(page.as_str())),
        ],
    )?;

    let envelope: wire::HeadlinesEnvelope = serde_json::from_value(body)?;
    Ok(assemble(envelope))
}

fn assemble(envelope: wire::HeadlinesEnvelope) -> Headlines {
    let articles = envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .map(|node| {
            let source = node.source.map_or_else(
                || ArticleSource {
                    id: None,
                    name: String::new(),
                },
                |s| ArticleSource {
                    id: s.id,
                    name: s.name.unwrap_or_default(),
                },
            );
            let published_at = node.published_at.as_deref().and_then(|s| {
                DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|d| d.with_timezone(&Utc))
            });

            Article {
                source,
                author: node.author,
                title: node.title,
                description: node.description,
                url: node.url,
                url_to_image: node.url_to_image,
                published_at,
                content: node.content,
            }
        })
        .collect::<Vec<_>>();

    Headlines {
        status: envelope.status.unwrap_or_else(|| "ok".to_string()),
        total_results: envelope.total_results.unwrap_or(articles.len() as u64),
        articles,
    }
}
