//! Cross-article comparison: sentiment distribution, topic overlap, pairwise
//! coverage differences, and the overall verdict.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::topics::MISCELLANEOUS;
use crate::types::{
    ClassifiedArticle, ComparativeAnalysis, ComparativeScores, CoverageDifference, Sentiment,
    TopicOverlap,
};

/// Verdict for an empty batch.
pub const NO_DATA: &str = "No data available";

/// Verdict when neither side clears the margin.
pub const MIXED_VERDICT: &str = "Mixed sentiment with no clear trend.";

/// Coverage differences stop after this many pairs across the whole batch.
///
/// Later pairs are never reported, so with four or more articles some
/// combinations go unmentioned.
pub const MAX_COVERAGE_PAIRS: usize = 2;

/// One side must lead by more than this many articles to decide the verdict.
const VERDICT_MARGIN: usize = 2;

/// Compare a batch of classified articles.
///
/// An empty batch yields no scores and the [`NO_DATA`] verdict.
#[must_use]
pub fn aggregate(company: &str, articles: &[ClassifiedArticle]) -> ComparativeAnalysis {
    if articles.is_empty() {
        tracing::debug!(company, "empty batch, skipping comparison");
        return ComparativeAnalysis {
            scores: None,
            final_sentiment: NO_DATA.to_string(),
        };
    }

    let sentiment_distribution = sentiment_distribution(articles);
    let final_sentiment = final_verdict(company, &sentiment_distribution);

    ComparativeAnalysis {
        scores: Some(ComparativeScores {
            sentiment_distribution,
            coverage_differences: coverage_differences(articles),
            topic_overlap: topic_overlap(articles),
        }),
        final_sentiment,
    }
}

/// Count of each sentiment present in the batch. Absent sentiments have no entry.
#[must_use]
pub fn sentiment_distribution(articles: &[ClassifiedArticle]) -> BTreeMap<Sentiment, usize> {
    let mut counts = BTreeMap::new();
    for article in articles {
        *counts.entry(article.sentiment()).or_insert(0) += 1;
    }
    counts
}

/// Topics shared by several articles and topics unique to one.
///
/// Each article's topics count once toward the batch frequency even if the
/// list repeats an entry.
#[must_use]
pub fn topic_overlap(articles: &[ClassifiedArticle]) -> TopicOverlap {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for article in articles {
        let mut in_article = HashSet::new();
        for topic in article.topics() {
            if !in_article.insert(topic.as_str()) {
                continue;
            }
            let count = frequency.entry(topic.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(topic.as_str());
            }
            *count += 1;
        }
    }

    let common: Vec<&str> = first_seen
        .into_iter()
        .filter(|t| frequency.get(t).copied().unwrap_or(0) > 1)
        .collect();
    let common_set: HashSet<&str> = common.iter().copied().collect();

    let mut unique_topics = BTreeMap::new();
    for (idx, article) in articles.iter().enumerate() {
        let mut seen = HashSet::new();
        let unique: Vec<String> = article
            .topics()
            .iter()
            .filter(|t| !common_set.contains(t.as_str()) && seen.insert(t.as_str()))
            .cloned()
            .collect();
        if !unique.is_empty() {
            unique_topics.insert(idx + 1, unique);
        }
    }

    TopicOverlap {
        common_topics: common.into_iter().map(str::to_string).collect(),
        unique_topics,
    }
}

/// Narratives for article pairs `(i, j)`, `i < j`, in ascending order,
/// truncated at [`MAX_COVERAGE_PAIRS`].
#[must_use]
pub fn coverage_differences(articles: &[ClassifiedArticle]) -> Vec<CoverageDifference> {
    let mut differences = Vec::with_capacity(MAX_COVERAGE_PAIRS);

    'pairs: for (i, first) in articles.iter().enumerate() {
        for (j, second) in articles.iter().enumerate().skip(i + 1) {
            if differences.len() >= MAX_COVERAGE_PAIRS {
                break 'pairs;
            }
            differences.push(describe_pair((i + 1, first), (j + 1, second)));
        }
    }

    differences
}

/// Verdict from the Positive/Negative balance with a hysteresis margin.
#[must_use]
pub fn final_verdict(company: &str, distribution: &BTreeMap<Sentiment, usize>) -> String {
    let count = |s: Sentiment| distribution.get(&s).copied().unwrap_or(0);
    let positive = count(Sentiment::Positive);
    let negative = count(Sentiment::Negative);

    if positive > negative + VERDICT_MARGIN {
        format!("Mostly positive coverage for {company}.")
    } else if negative > positive + VERDICT_MARGIN {
        format!("Mostly negative coverage for {company}.")
    } else {
        MIXED_VERDICT.to_string()
    }
}

fn describe_pair(
    (a, first): (usize, &ClassifiedArticle),
    (b, second): (usize, &ClassifiedArticle),
) -> CoverageDifference {
    let comparison = format!(
        "Article {a} ({}) highlights {}, while Article {b} ({}) discusses {}.",
        first.sentiment(),
        topic_list(first),
        second.sentiment(),
        topic_list(second),
    );

    let lean_a = first.sentiment().to_string().to_lowercase();
    let lean_b = second.sentiment().to_string().to_lowercase();
    let impact = if first.sentiment() == second.sentiment() {
        format!(
            "Articles {a} and {b} both lean {lean_a}, on {} and {} respectively.",
            lead_topic(first),
            lead_topic(second),
        )
    } else {
        format!(
            "Article {a} leans {lean_a} on {}, whereas Article {b} leans {lean_b} on {}.",
            lead_topic(first),
            lead_topic(second),
        )
    };

    CoverageDifference { comparison, impact }
}

fn topic_list(article: &ClassifiedArticle) -> String {
    if article.topics().is_empty() {
        MISCELLANEOUS.to_string()
    } else {
        article.topics().join(", ")
    }
}

/// First topic, or [`MISCELLANEOUS`] for an article without topics.
fn lead_topic(article: &ClassifiedArticle) -> &str {
    article
        .topics()
        .first()
        .map_or(MISCELLANEOUS, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Article;
    use Sentiment::{Negative, Neutral, Positive};

    fn article(sentiment: Sentiment, topics: &[&str]) -> ClassifiedArticle {
        ClassifiedArticle::new(
            Article::default(),
            sentiment,
            topics.iter().map(|t| (*t).to_string()).collect(),
        )
    }

    fn batch(sentiments: &[Sentiment]) -> Vec<ClassifiedArticle> {
        sentiments
            .iter()
            .map(|s| article(*s, &["Sales"]))
            .collect()
    }

    #[test]
    fn distribution_omits_absent_sentiments_and_sums_to_len() {
        let articles = batch(&[Positive, Negative, Positive]);
        let dist = sentiment_distribution(&articles);
        assert_eq!(dist.get(&Positive), Some(&2));
        assert_eq!(dist.get(&Negative), Some(&1));
        assert!(!dist.contains_key(&Neutral));
        assert_eq!(dist.values().sum::<usize>(), articles.len());
    }

    #[test]
    fn four_positive_two_negative_is_mixed() {
        let articles = batch(&[Positive, Positive, Positive, Positive, Negative, Negative]);
        let dist = sentiment_distribution(&articles);
        assert_eq!(final_verdict("Tesla", &dist), MIXED_VERDICT);
    }

    #[test]
    fn five_positive_two_negative_is_mostly_positive() {
        let articles = batch(&[
            Positive, Positive, Positive, Positive, Positive, Negative, Negative,
        ]);
        let dist = sentiment_distribution(&articles);
        assert_eq!(
            final_verdict("Tesla", &dist),
            "Mostly positive coverage for Tesla."
        );
    }

    #[test]
    fn three_negative_no_positive_is_mostly_negative() {
        let articles = batch(&[Negative, Negative, Negative, Neutral]);
        let dist = sentiment_distribution(&articles);
        assert_eq!(
            final_verdict("Boeing", &dist),
            "Mostly negative coverage for Boeing."
        );
    }

    #[test]
    fn neutral_articles_do_not_move_the_verdict() {
        let articles = batch(&[Neutral, Neutral, Neutral, Neutral, Positive]);
        let dist = sentiment_distribution(&articles);
        assert_eq!(final_verdict("Tesla", &dist), MIXED_VERDICT);
    }

    #[test]
    fn common_topics_keep_first_seen_order() {
        let articles = vec![
            article(Positive, &["Technology", "Sales"]),
            article(Negative, &["Sales", "Safety"]),
            article(Neutral, &["Safety", "Technology", "Events"]),
        ];
        let overlap = topic_overlap(&articles);
        assert_eq!(overlap.common_topics, vec!["Technology", "Sales", "Safety"]);
        assert_eq!(overlap.unique_topics.len(), 1);
        assert_eq!(overlap.unique_topics.get(&3), Some(&vec!["Events".to_string()]));
    }

    #[test]
    fn unique_topics_exclude_common_and_omit_empty_entries() {
        let articles = vec![
            article(Positive, &["Technology", "Innovation"]),
            article(Negative, &["Technology"]),
            article(Neutral, &["Regulation"]),
        ];
        let overlap = topic_overlap(&articles);
        assert_eq!(overlap.common_topics, vec!["Technology"]);
        assert_eq!(
            overlap.unique_topics.get(&1),
            Some(&vec!["Innovation".to_string()])
        );
        assert!(!overlap.unique_topics.contains_key(&2));
        assert_eq!(
            overlap.unique_topics.get(&3),
            Some(&vec!["Regulation".to_string()])
        );
    }

    #[test]
    fn repeated_topic_within_one_article_is_not_common() {
        let articles = vec![
            article(Positive, &["Sales", "Sales"]),
            article(Negative, &["Safety"]),
        ];
        let overlap = topic_overlap(&articles);
        assert!(overlap.common_topics.is_empty());
        assert_eq!(overlap.unique_topics.get(&1), Some(&vec!["Sales".to_string()]));
    }

    #[test]
    fn coverage_differences_are_capped_across_the_whole_batch() {
        // Only (1,2) and (1,3) are reported; (2,3) and later pairs never appear.
        let articles = batch(&[Positive, Negative, Neutral, Positive, Negative]);
        let diffs = coverage_differences(&articles);
        assert_eq!(diffs.len(), MAX_COVERAGE_PAIRS);
        assert!(diffs[0].comparison.starts_with("Article 1 "));
        assert!(diffs[0].comparison.contains("Article 2 "));
        assert!(diffs[1].comparison.starts_with("Article 1 "));
        assert!(diffs[1].comparison.contains("Article 3 "));
    }

    #[test]
    fn coverage_differences_for_small_batches() {
        assert!(coverage_differences(&batch(&[Positive])).is_empty());
        assert_eq!(coverage_differences(&batch(&[Positive, Negative])).len(), 1);
    }

    #[test]
    fn coverage_narrative_cites_sentiments_and_first_topics() {
        let articles = vec![
            article(Negative, &["Manufacturing", "Safety"]),
            article(Positive, &["Technology"]),
        ];
        let diff = &coverage_differences(&articles)[0];
        assert_eq!(
            diff.comparison,
            "Article 1 (Negative) highlights Manufacturing, Safety, while Article 2 (Positive) discusses Technology."
        );
        assert_eq!(
            diff.impact,
            "Article 1 leans negative on Manufacturing, whereas Article 2 leans positive on Technology."
        );
    }

    #[test]
    fn matching_sentiments_use_shared_lean_wording() {
        let articles = vec![
            article(Positive, &["Sales"]),
            article(Positive, &["Events"]),
        ];
        let diff = &coverage_differences(&articles)[0];
        assert_eq!(
            diff.impact,
            "Articles 1 and 2 both lean positive, on Sales and Events respectively."
        );
    }

    #[test]
    fn article_without_topics_cites_miscellaneous() {
        let articles = vec![article(Neutral, &[]), article(Positive, &["Sales"])];
        let diff = &coverage_differences(&articles)[0];
        assert!(diff.comparison.contains("(Neutral) highlights Miscellaneous"));
        assert!(diff.impact.contains("leans neutral on Miscellaneous"));
    }

    #[test]
    fn empty_batch_has_no_scores() {
        let analysis = aggregate("Tesla", &[]);
        assert!(analysis.scores.is_none());
        assert_eq!(analysis.final_sentiment, NO_DATA);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let articles = vec![
            article(Positive, &["Technology", "Sales"]),
            article(Negative, &["Sales"]),
            article(Neutral, &["Events"]),
        ];
        assert_eq!(aggregate("Tesla", &articles), aggregate("Tesla", &articles));
    }
}
