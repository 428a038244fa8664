//! newsapi-rs: a thin, validated client for the [newsapi.org](https://newsapi.org) v2 API.
//!
//! The crate wraps two endpoints:
//! - `sources` via [`NewsClient::sources`], [`NewsClient::sources_info`] and [`SourcesBuilder`].
//! - `top-headlines` via [`NewsClient::top_headlines`] and [`HeadlinesBuilder`].
//!
//! Filter values are checked against fixed allow-lists before any request is
//! sent. Calls are blocking. Failures come back as [`NewsError`]; the library
//! never exits the process.
//!
//! ```no_run
//! use newsapi_rs::{ALL, NewsClient};
//!
//! let client = NewsClient::new("my-api-key");
//! let headlines = client.headlines().country("us").category("business").fetch()?;
//! for a in headlines.articles {
//!     println!("{} ({})", a.title.unwrap_or_default(), a.source.name);
//! }
//! # Ok::<(), newsapi_rs::NewsError>(())
//! ```

pub mod core;
pub mod headlines;
pub mod sources;

pub use crate::core::{
    ALL, ALLOWED_CATEGORY, ALLOWED_COUNTRY, ALLOWED_LANGUAGE, NewsClient, NewsClientBuilder,
    NewsError,
};
pub use crate::core::net::{encode_query, url_join};
pub use crate::core::params::{validate_category, validate_country, validate_language};
pub use headlines::{Article, ArticleSource, Headlines, HeadlinesBuilder};
pub use sources::{Source, SourceFields, SourcesBuilder, SourcesInfo};
