//! Comparative news analysis for newslens.
//!
//! Takes a batch of short articles about one company, labels each with a
//! sentiment and up to three topics, then compares the batch: sentiment
//! distribution, pairwise coverage differences, shared and unique topics,
//! and a one-line verdict. Articles come from any [`ArticleSource`], by
//! default the Bing News RSS search feed.

pub mod aggregator;
pub mod chunker;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod sources;
pub mod topics;
pub mod types;

pub use aggregator::aggregate;
pub use classifier::SentimentClassifier;
pub use error::AnalysisError;
pub use pipeline::{build_comparative_report, Analyzer};
pub use report::{build_report, ComparativeReport};
pub use scorer::polarity_score;
pub use sources::{ArticleSource, BingNewsSource, JsonFileSource, StaticSource};
pub use topics::{StopTerms, TopicExtractor, MAX_TOPICS, MISCELLANEOUS};
pub use types::{Article, ClassifiedArticle, ComparativeAnalysis, RawArticle, Sentiment};
