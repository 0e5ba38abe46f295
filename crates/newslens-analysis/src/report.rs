//! Final report assembly in the shape API consumers bind to.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{ClassifiedArticle, ComparativeAnalysis, CoverageDifference, Sentiment};

/// The comparative report returned for one subject.
///
/// Field names and nesting follow the published JSON contract, spaces included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparativeReport {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ArticleReport>,
    /// Serialized as `{}` for an empty batch.
    #[serde(
        rename = "Comparative Sentiment Score",
        serialize_with = "empty_object_when_none"
    )]
    pub comparative_sentiment_score: Option<ComparativeSentimentScore>,
    #[serde(rename = "Final Sentiment Analysis")]
    pub final_sentiment_analysis: String,
    /// Reference to rendered audio, filled in by whoever renders it.
    #[serde(rename = "Audio")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleReport {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparativeSentimentScore {
    #[serde(rename = "Sentiment Distribution")]
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlapReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicOverlapReport {
    #[serde(rename = "Common Topics")]
    pub common_topics: Vec<String>,
    /// Keyed by 1-based ordinal, serialized as `"Article N"` in numeric order.
    #[serde(rename = "Unique Topics", serialize_with = "article_keyed")]
    pub unique_topics: BTreeMap<usize, Vec<String>>,
}

impl ComparativeReport {
    #[must_use]
    pub fn with_audio(mut self, reference: impl Into<String>) -> Self {
        self.audio = Some(reference.into());
        self
    }
}

/// Package classified articles and their comparison into a report.
#[must_use]
pub fn build_report(
    company: &str,
    articles: &[ClassifiedArticle],
    analysis: ComparativeAnalysis,
) -> ComparativeReport {
    let articles = articles
        .iter()
        .map(|a| ArticleReport {
            title: a.title().to_string(),
            summary: a.summary().to_string(),
            sentiment: a.sentiment(),
            topics: a.topics().to_vec(),
        })
        .collect();

    let comparative_sentiment_score = analysis.scores.map(|scores| ComparativeSentimentScore {
        sentiment_distribution: scores.sentiment_distribution,
        coverage_differences: scores.coverage_differences,
        topic_overlap: TopicOverlapReport {
            common_topics: scores.topic_overlap.common_topics,
            unique_topics: scores.topic_overlap.unique_topics,
        },
    });

    ComparativeReport {
        company: company.to_string(),
        articles,
        comparative_sentiment_score,
        final_sentiment_analysis: analysis.final_sentiment,
        audio: None,
    }
}

fn empty_object_when_none<S: Serializer>(
    value: &Option<ComparativeSentimentScore>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(score) => score.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

fn article_keyed<S: Serializer>(
    unique: &BTreeMap<usize, Vec<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(unique.len()))?;
    for (ordinal, topics) in unique {
        map.serialize_entry(&format!("Article {ordinal}"), topics)?;
    }
    map.end()
}
