use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct HeadlinesEnvelope {
    pub(crate) status: Option<String>,
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<ArticleNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) source: Option<SourceRef>,
    pub(crate) author: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub(crate) url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceRef {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
}
