//! Bing News RSS source.

use std::time::Duration;

use newslens_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use super::rss_helpers::parse_rss_items;
use super::ArticleSource;
use crate::error::AnalysisError;
use crate::types::RawArticle;

/// Fetches the latest news for a company from a Bing-style RSS search endpoint.
#[derive(Debug, Clone)]
pub struct BingNewsSource {
    client: Client,
    feed_url: String,
    max_articles: usize,
    summary_max_chars: usize,
}

impl BingNewsSource {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        feed_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_articles: usize,
        summary_max_chars: usize,
    ) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            feed_url: feed_url.to_owned(),
            max_articles,
            summary_max_chars,
        })
    }

    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalysisError> {
        Self::new(
            &config.feed_url,
            config.feed_timeout_secs,
            &config.feed_user_agent,
            config.max_articles,
            config.summary_max_chars,
        )
    }

    /// Search URL for `company`: `q=<company>+latest+news&format=rss`.
    #[must_use]
    pub fn search_url(&self, company: &str) -> String {
        let encoded = utf8_percent_encode(company.trim(), NON_ALPHANUMERIC);
        let separator = if self.feed_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}q={encoded}+latest+news&format=rss",
            self.feed_url
        )
    }
}

impl ArticleSource for BingNewsSource {
    async fn fetch_articles(&self, company: &str) -> Result<Vec<RawArticle>, AnalysisError> {
        let url = self.search_url(company);
        tracing::debug!(company, url = %url, "fetching news feed");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_rss_items(&body, self.max_articles, self.summary_max_chars)
    }
}
