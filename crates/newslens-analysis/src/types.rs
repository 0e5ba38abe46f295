use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentiment label assigned to one article.
///
/// Variant order is the order sentiments are listed in a serialized distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// One record as delivered by an article source. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default, alias = "Title")]
    pub title: Option<String>,
    #[serde(default, alias = "Summary")]
    pub summary: Option<String>,
}

/// A normalized article: missing fields become empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub summary: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.as_deref().map(normalize_space).unwrap_or_default(),
            summary: raw.summary.as_deref().map(normalize_space).unwrap_or_default(),
        }
    }
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// An article with its sentiment and topic labels attached.
///
/// Fields are private so a classified article cannot be relabelled after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedArticle {
    article: Article,
    sentiment: Sentiment,
    topics: Vec<String>,
}

impl ClassifiedArticle {
    #[must_use]
    pub fn new(article: Article, sentiment: Sentiment, topics: Vec<String>) -> Self {
        Self {
            article,
            sentiment,
            topics,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.article.title
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.article.summary
    }

    #[must_use]
    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

/// A generated narrative contrasting two articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicOverlap {
    /// Topics found in two or more articles, in first-seen order.
    pub common_topics: Vec<String>,
    /// Topics found in only one article, keyed by 1-based article ordinal.
    /// Articles with no unique topic have no entry.
    pub unique_topics: BTreeMap<usize, Vec<String>>,
}

/// Cross-article statistics. Only produced for a non-empty batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparativeScores {
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    pub coverage_differences: Vec<CoverageDifference>,
    pub topic_overlap: TopicOverlap,
}

/// Aggregator output for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparativeAnalysis {
    /// `None` when the batch was empty.
    pub scores: Option<ComparativeScores>,
    pub final_sentiment: String,
}
