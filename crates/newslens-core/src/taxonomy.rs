//! Analysis taxonomy: sentiment thresholds, the negative-cue lexicon, topic
//! categories, and the fallback heuristics used when no category matches.
//!
//! The taxonomy is passed explicitly into every engine that needs it, so a
//! different subject domain only needs a different YAML file.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Taxonomy {
    pub sentiment: SentimentSettings,
    pub topics: TopicSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SentimentSettings {
    /// Polarity strictly above this is Positive.
    pub positive_threshold: f32,
    /// Polarity strictly below this is Negative.
    pub negative_threshold: f32,
    /// Substrings that force a Negative label regardless of polarity.
    #[serde(default)]
    pub negative_cues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicSettings {
    pub categories: Vec<CategoryConfig>,
    /// Generic words that disqualify a phrase in addition to the subject's own name.
    #[serde(default)]
    pub boilerplate_terms: Vec<String>,
    /// Longer runs of content words are split into chunks of at most this many tokens.
    #[serde(default = "default_max_phrase_tokens")]
    pub max_phrase_tokens: usize,
    #[serde(default)]
    pub fallback: FallbackSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryConfig {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackSettings {
    /// Two-token phrases ending in one of these are treated as personal names.
    #[serde(default)]
    pub name_stopwords: Vec<String>,
    /// Candidates sharing fewer tokens than this with the title are not eligible.
    #[serde(default)]
    pub min_title_overlap: usize,
}

fn default_max_phrase_tokens() -> usize {
    4
}

impl Taxonomy {
    /// The stock English business-news taxonomy.
    ///
    /// `config/taxonomy.yaml` ships the same values; this constructor exists for
    /// callers running without a config directory.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sentiment: SentimentSettings {
                positive_threshold: 0.1,
                negative_threshold: -0.1,
                negative_cues: strings(&[
                    "recall",
                    "concern",
                    "issue",
                    "attack",
                    "fiasco",
                    "pressure",
                    "backlash",
                    "controversy",
                    "uninstall",
                    "vulnerability",
                    "accidentally",
                ]),
            },
            topics: TopicSettings {
                categories: builtin_categories(),
                boilerplate_terms: strings(&["news", "report", "latest"]),
                max_phrase_tokens: default_max_phrase_tokens(),
                fallback: FallbackSettings {
                    name_stopwords: strings(&[
                        "musk",
                        "cook",
                        "nadella",
                        "pichai",
                        "zuckerberg",
                        "bezos",
                        "jassy",
                        "altman",
                        "huang",
                        "dimon",
                        "buffett",
                        "gates",
                    ]),
                    min_title_overlap: 0,
                },
            },
        }
    }

    /// Check every section; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sentiment.validate()?;
        self.topics.validate()
    }
}

impl SentimentSettings {
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a threshold is non-finite, outside
    /// `[-1, 1]`, or the negative threshold exceeds the positive one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, value) in [
            ("positive_threshold", self.positive_threshold),
            ("negative_threshold", self.negative_threshold),
        ] {
            if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "sentiment.{label} must be within [-1, 1], got {value}"
                )));
            }
        }

        if self.negative_threshold > self.positive_threshold {
            return Err(ConfigError::Validation(format!(
                "sentiment.negative_threshold ({}) exceeds positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }

        if self.negative_cues.iter().any(|cue| cue.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "sentiment.negative_cues must not contain blank entries".to_string(),
            ));
        }

        Ok(())
    }
}

impl TopicSettings {
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the category map is empty, a
    /// category is unnamed, duplicated, or has no usable keyword, or the phrase
    /// length limit is below two tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "topics.categories must define at least one category".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "topic category name must be non-empty".to_string(),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate topic category: '{name}'"
                )));
            }
            if category.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "topic category '{name}' has no keywords"
                )));
            }
        }

        if self.max_phrase_tokens < 2 {
            return Err(ConfigError::Validation(format!(
                "topics.max_phrase_tokens must be at least 2, got {}",
                self.max_phrase_tokens
            )));
        }

        Ok(())
    }
}

/// Load and validate a taxonomy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TaxonomyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let taxonomy: Taxonomy = serde_yaml::from_str(&content)?;
    taxonomy.validate()?;

    Ok(taxonomy)
}

/// Where a loaded taxonomy came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyOrigin {
    File,
    Builtin,
}

/// Load the taxonomy at `path`, falling back to [`Taxonomy::builtin`] when no
/// file exists there. A file that exists but fails to parse or validate is
/// still an error.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read, parsed, or validated.
pub fn load_taxonomy_or_builtin(path: &Path) -> Result<(Taxonomy, TaxonomyOrigin), ConfigError> {
    if path.exists() {
        Ok((load_taxonomy(path)?, TaxonomyOrigin::File))
    } else {
        Ok((Taxonomy::builtin(), TaxonomyOrigin::Builtin))
    }
}

fn builtin_categories() -> Vec<CategoryConfig> {
    let category = |name: &str, keywords: &[&str]| CategoryConfig {
        name: name.to_string(),
        keywords: strings(keywords),
    };

    vec![
        category(
            "Safety",
            &[
                "safety", "recall", "crash", "accident", "injur", "fault", "defect", "hazard",
            ],
        ),
        category(
            "Innovation",
            &[
                "innovat",
                "unveil",
                "breakthrough",
                "prototype",
                "launch",
                "next-gen",
                "patent",
                "concept",
            ],
        ),
        category(
            "Security",
            &[
                "security", "vulnerab", "hack", "breach", "cyber", "privacy", "malware", "exploit",
            ],
        ),
        category(
            "Manufacturing",
            &[
                "factory",
                "manufactur",
                "production",
                "plant",
                "assembly",
                "supply chain",
                "battery",
                "output",
            ],
        ),
        category(
            "Leadership",
            &[
                "ceo",
                "executive",
                "leadership",
                "founder",
                "chairman",
                "director",
                "management",
                "chief",
            ],
        ),
        category(
            "Sales",
            &[
                "sales",
                "revenue",
                "deliver",
                "earnings",
                "profit",
                "demand",
                "market share",
                "stock",
                "price",
                "quarter",
            ],
        ),
        category(
            "Regulation",
            &[
                "regulat",
                "lawsuit",
                "legislat",
                "government",
                "compliance",
                "investigation",
                "probe",
                "policy",
                "tariff",
                "antitrust",
                "court",
                "penalty",
            ],
        ),
        category(
            "Technology",
            &[
                "tech",
                "software",
                "intelligence",
                "autopilot",
                "self-driving",
                "chip",
                "robot",
                "interface",
                "cloud",
                "platform",
                "algorithm",
            ],
        ),
        category(
            "Controversy",
            &[
                "controvers",
                "backlash",
                "scandal",
                "criticism",
                "fiasco",
                "protest",
                "boycott",
                "outrage",
                "dispute",
            ],
        ),
        category(
            "Events",
            &[
                "event",
                "conference",
                "summit",
                "expo",
                "keynote",
                "showcase",
                "festival",
                "ceremony",
            ],
        ),
        category(
            "Collaboration",
            &[
                "partner",
                "collaborat",
                "alliance",
                "joint venture",
                "merger",
                "acquisition",
                "deal",
                "agreement",
            ],
        ),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
