//! Articles read from a JSON file on disk.

use std::path::{Path, PathBuf};

use newslens_core::AppConfig;

use super::rss_helpers::clean_summary;
use super::ArticleSource;
use crate::error::AnalysisError;
use crate::types::RawArticle;

/// Reads a JSON array of `{ "title", "summary" }` objects.
///
/// The same batch is returned whatever company is asked for. Only the first
/// `max_articles` records are kept, and summaries get the same markup
/// stripping and length cap as feed descriptions.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    max_articles: usize,
    summary_max_chars: usize,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, max_articles: usize, summary_max_chars: usize) -> Self {
        Self {
            path: path.into(),
            max_articles,
            summary_max_chars,
        }
    }

    /// File source with the article and summary caps from `config`.
    pub fn from_config(path: impl Into<PathBuf>, config: &AppConfig) -> Self {
        Self::new(path, config.max_articles, config.summary_max_chars)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArticleSource for JsonFileSource {
    async fn fetch_articles(&self, _company: &str) -> Result<Vec<RawArticle>, AnalysisError> {
        let path = self.path.display().to_string();
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| AnalysisError::Io {
                path: path.clone(),
                source,
            })?;
        let records: Vec<RawArticle> = serde_json::from_str(&contents)
            .map_err(|source| AnalysisError::Json { path, source })?;

        Ok(records
            .into_iter()
            .take(self.max_articles)
            .map(|raw| RawArticle {
                title: raw.title,
                summary: raw
                    .summary
                    .as_deref()
                    .and_then(|s| clean_summary(s, self.summary_max_chars)),
            })
            .collect())
    }
}
