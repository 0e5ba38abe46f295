//! Per-article topic labelling.

use std::collections::{BTreeSet, HashSet};

use newslens_core::TopicSettings;

use crate::chunker::{noun_phrases, word_tokens, Phrase};
use crate::error::AnalysisError;

/// Sole topic of an article from which nothing usable could be extracted.
pub const MISCELLANEOUS: &str = "Miscellaneous";

/// Upper bound on topics per article.
pub const MAX_TOPICS: usize = 3;

/// Terms that disqualify a candidate phrase: the subject's own name plus
/// generic boilerplate. A term matches when all of its word tokens appear
/// consecutively in the phrase, so "gm" does not hit "paradigm".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopTerms {
    terms: Vec<Vec<String>>,
}

impl StopTerms {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| word_tokens(t.as_ref()))
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// Stop terms for one subject: its full lower-cased name, each name word
    /// of three or more characters, and the boilerplate list.
    #[must_use]
    pub fn for_subject(subject: &str, boilerplate: &[String]) -> Self {
        let name = subject.trim().to_lowercase();
        let words = word_tokens(&name)
            .into_iter()
            .filter(|w| w.chars().count() >= 3);
        Self::new(
            std::iter::once(name.clone())
                .chain(words)
                .chain(boilerplate.iter().cloned()),
        )
    }

    /// Whether any term occurs as a whole-token run inside `tokens`.
    #[must_use]
    pub fn matches(&self, tokens: &[String]) -> bool {
        self.terms
            .iter()
            .any(|term| tokens.windows(term.len()).any(|w| w == term.as_slice()))
    }

    #[must_use]
    pub fn terms(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.join(" ")).collect()
    }
}

#[derive(Debug, Clone)]
struct Category {
    name: String,
    keywords: Vec<String>,
}

/// Derives one to three topic labels for an article.
#[derive(Debug, Clone)]
pub struct TopicExtractor {
    categories: Vec<Category>,
    boilerplate: Vec<String>,
    max_phrase_tokens: usize,
    name_stopwords: HashSet<String>,
    min_title_overlap: usize,
}

impl TopicExtractor {
    /// # Errors
    ///
    /// Returns [`AnalysisError::Config`] if the settings fail validation.
    pub fn new(settings: &TopicSettings) -> Result<Self, AnalysisError> {
        settings.validate()?;

        let categories = settings
            .categories
            .iter()
            .map(|c| Category {
                name: c.name.trim().to_string(),
                keywords: c
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
            })
            .collect();

        Ok(Self {
            categories,
            boilerplate: settings.boilerplate_terms.clone(),
            max_phrase_tokens: settings.max_phrase_tokens,
            name_stopwords: settings
                .fallback
                .name_stopwords
                .iter()
                .map(|n| n.trim().to_lowercase())
                .collect(),
            min_title_overlap: settings.fallback.min_title_overlap,
        })
    }

    /// Stop terms for `subject` combined with this extractor's boilerplate list.
    #[must_use]
    pub fn stop_terms_for(&self, subject: &str) -> StopTerms {
        StopTerms::for_subject(subject, &self.boilerplate)
    }

    /// Label one article.
    ///
    /// Category matches come back sorted alphabetically and capped at
    /// [`MAX_TOPICS`]. With no match, the most title-relevant phrase is used
    /// instead, and [`MISCELLANEOUS`] when no phrase survives filtering.
    #[must_use]
    pub fn extract(&self, title: &str, summary: &str, stop_terms: &StopTerms) -> Vec<String> {
        // Joined as separate clauses so no phrase straddles title and summary.
        let text = format!("{title}. {summary}");

        let candidates: Vec<(Phrase, String)> = noun_phrases(&text, self.max_phrase_tokens)
            .into_iter()
            .filter(|p| p.len() >= 2 && !stop_terms.matches(p.tokens()))
            .map(|p| {
                let text = p.text();
                (p, text)
            })
            .collect();

        if candidates.is_empty() {
            return vec![MISCELLANEOUS.to_string()];
        }

        let mut matched = BTreeSet::new();
        for (_, text) in &candidates {
            for category in &self.categories {
                if category.keywords.iter().any(|k| text.contains(k.as_str())) {
                    matched.insert(category.name.as_str());
                }
            }
        }

        if !matched.is_empty() {
            return matched
                .into_iter()
                .take(MAX_TOPICS)
                .map(str::to_string)
                .collect();
        }

        match self.most_title_relevant(title, &candidates) {
            Some(topic) => vec![topic],
            None => vec![MISCELLANEOUS.to_string()],
        }
    }

    /// Highest (title-token overlap, character length) candidate, first one on ties.
    fn most_title_relevant(&self, title: &str, candidates: &[(Phrase, String)]) -> Option<String> {
        let title_tokens: HashSet<String> = word_tokens(title).into_iter().collect();

        let mut best: Option<((usize, usize), &str)> = None;
        for (phrase, text) in candidates {
            if self.looks_like_personal_name(phrase) {
                continue;
            }

            let tokens: HashSet<&String> = phrase.tokens().iter().collect();
            let overlap = tokens.iter().filter(|t| title_tokens.contains(**t)).count();
            if overlap < self.min_title_overlap {
                continue;
            }

            let key = (overlap, text.chars().count());
            match best {
                Some((best_key, _)) if best_key >= key => {}
                _ => best = Some((key, text.as_str())),
            }
        }

        best.map(|(_, text)| capitalize(text))
    }

    fn looks_like_personal_name(&self, phrase: &Phrase) -> bool {
        match phrase.tokens() {
            [_, last] => self.name_stopwords.contains(last),
            _ => false,
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
