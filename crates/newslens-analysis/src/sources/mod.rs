//! Article source abstractions.

mod bing_rss;
mod json_file;
mod rss_helpers;

use std::future::Future;

pub use bing_rss::BingNewsSource;
pub use json_file::JsonFileSource;
pub use rss_helpers::{parse_rss_items, strip_html, truncate_chars};

use crate::error::AnalysisError;
use crate::types::RawArticle;

/// Anything that can produce raw articles about a company.
///
/// Implementations return at most their configured number of articles, in
/// feed order. Failures are reported, not swallowed; the pipeline decides
/// whether to degrade.
pub trait ArticleSource {
    fn fetch_articles(
        &self,
        company: &str,
    ) -> impl Future<Output = Result<Vec<RawArticle>, AnalysisError>> + Send;
}

/// A fixed batch, returned for every company. Handy for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    articles: Vec<RawArticle>,
}

impl StaticSource {
    #[must_use]
    pub fn new(articles: Vec<RawArticle>) -> Self {
        Self { articles }
    }
}

impl ArticleSource for StaticSource {
    async fn fetch_articles(&self, _company: &str) -> Result<Vec<RawArticle>, AnalysisError> {
        Ok(self.articles.clone())
    }
}
