//! Report pipeline orchestration.

use newslens_core::Taxonomy;

use crate::aggregator::aggregate;
use crate::classifier::SentimentClassifier;
use crate::error::AnalysisError;
use crate::report::{build_report, ComparativeReport};
use crate::sources::ArticleSource;
use crate::topics::{StopTerms, TopicExtractor};
use crate::types::{Article, ClassifiedArticle, RawArticle};

/// Classifies a batch of articles and compares them.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Analyzer {
    classifier: SentimentClassifier,
    extractor: TopicExtractor,
}

impl Analyzer {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`] if the taxonomy fails validation.
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, AnalysisError> {
        Ok(Self {
            classifier: SentimentClassifier::new(&taxonomy.sentiment)?,
            extractor: TopicExtractor::new(&taxonomy.topics)?,
        })
    }

    #[must_use]
    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    #[must_use]
    pub fn extractor(&self) -> &TopicExtractor {
        &self.extractor
    }

    /// Label one article with a sentiment and its topics.
    #[must_use]
    pub fn classify_article(&self, article: Article, stop_terms: &StopTerms) -> ClassifiedArticle {
        let sentiment = self.classifier.classify(&article.title, &article.summary);
        let topics = self
            .extractor
            .extract(&article.title, &article.summary, stop_terms);
        ClassifiedArticle::new(article, sentiment, topics)
    }

    /// Label every article, preserving input order.
    #[must_use]
    pub fn classify_all(&self, company: &str, raw: Vec<RawArticle>) -> Vec<ClassifiedArticle> {
        let stop_terms = self.extractor.stop_terms_for(company);
        raw.into_iter()
            .map(Article::from)
            .map(|article| self.classify_article(article, &stop_terms))
            .collect()
    }

    /// Build the full comparative report for an already-fetched batch.
    ///
    /// An empty batch yields a report with no articles and a
    /// "No data available" verdict.
    #[must_use]
    pub fn analyze_articles(&self, company: &str, raw: Vec<RawArticle>) -> ComparativeReport {
        let classified = self.classify_all(company, raw);
        tracing::debug!(
            company,
            count = classified.len(),
            "classified articles"
        );
        build_comparative_report(company, &classified)
    }

    /// Fetch articles for `company` from `source` and report on them.
    ///
    /// A source failure is logged and treated as an empty batch, so the
    /// caller always receives a report.
    pub async fn analyze_company<S>(&self, source: &S, company: &str) -> ComparativeReport
    where
        S: ArticleSource + Sync,
    {
        let raw = match source.fetch_articles(company).await {
            Ok(raw) => {
                tracing::debug!(company, count = raw.len(), "fetched articles");
                raw
            }
            Err(e) => {
                tracing::warn!(
                    company,
                    error = %e,
                    "article fetch failed; reporting on an empty batch"
                );
                Vec::new()
            }
        };

        if raw.is_empty() {
            tracing::info!(company, "no articles found");
        }

        self.analyze_articles(company, raw)
    }
}

/// Compare already-classified articles and package the result.
#[must_use]
pub fn build_comparative_report(
    company: &str,
    articles: &[ClassifiedArticle],
) -> ComparativeReport {
    build_report(company, articles, aggregate(company, articles))
}
