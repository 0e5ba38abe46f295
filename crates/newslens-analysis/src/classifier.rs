//! Per-article sentiment labelling.

use newslens_core::SentimentSettings;

use crate::error::AnalysisError;
use crate::scorer::polarity_score;
use crate::types::Sentiment;

/// Labels an article Positive, Negative, or Neutral.
///
/// A match against the negative-cue lexicon short-circuits to Negative before
/// polarity is computed: short news blurbs often describe adverse events in
/// mild language that word-level scoring under-weights.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive_threshold: f32,
    negative_threshold: f32,
    negative_cues: Vec<String>,
}

impl SentimentClassifier {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`] if the settings fail validation.
    pub fn new(settings: &SentimentSettings) -> Result<Self, AnalysisError> {
        settings.validate()?;
        Ok(Self {
            positive_threshold: settings.positive_threshold,
            negative_threshold: settings.negative_threshold,
            negative_cues: settings
                .negative_cues
                .iter()
                .map(|cue| cue.trim().to_lowercase())
                .collect(),
        })
    }

    #[must_use]
    pub fn classify(&self, title: &str, summary: &str) -> Sentiment {
        let text = format!("{title} {summary}").to_lowercase();

        if let Some(cue) = self.matching_cue(&text) {
            tracing::trace!(cue, "negative cue matched");
            return Sentiment::Negative;
        }

        let polarity = polarity_score(&text);
        if polarity > self.positive_threshold {
            Sentiment::Positive
        } else if polarity < self.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    fn matching_cue(&self, text: &str) -> Option<&str> {
        self.negative_cues
            .iter()
            .find(|cue| text.contains(cue.as_str()))
            .map(String::as_str)
    }
}
