//! Rule-based noun-phrase chunking for short news text.
//!
//! There is no part-of-speech model here. A phrase is a maximal run of
//! content words inside one clause, where a run is broken by clause
//! punctuation, function words, common headline verbs, past-tense forms, and
//! bare numbers. That is enough to pull "battery fault" out of
//! "Tesla recall issued for battery fault" without dragging in the verb.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.,;:!?()\[\]{}"|\x{2013}\x{2014}\x{201C}\x{201D}]+|\s-\s"#)
        .expect("valid clause regex")
});

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'&\-]*").expect("valid word regex")
});

/// Words that never belong to a topical phrase.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "nor", "for", "of", "in", "on", "at", "to", "from",
    "by", "with", "without", "about", "as", "into", "onto", "over", "after", "before", "amid",
    "against", "between", "during", "under", "than", "then", "so", "if", "while", "because",
    "that", "this", "these", "those", "it", "its", "he", "she", "they", "them", "their", "his",
    "her", "we", "our", "you", "your", "i", "me", "my", "who", "whom", "whose", "which", "what",
    "when", "where", "why", "how", "all", "any", "some", "more", "most", "other", "such", "only",
    "own", "same", "too", "very", "just", "also", "not", "no", "never", "up", "down", "out",
    "off", "again", "here", "there", "via", "per", "now", "still", "yet", "amp",
];

/// Verbs that show up constantly in headlines and would otherwise glue
/// subject and object into one span.
const HEADLINE_VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "has", "have", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "must", "says", "say", "said",
    "unveils", "unveil", "announces", "announce", "launches", "reveals", "plans", "faces", "gets",
    "makes", "takes", "shows", "hits", "adds", "raises", "wins", "beats", "misses", "sees",
    "expects", "warns", "seeks", "files", "joins", "sets", "eyes", "slams", "hails", "urges",
];

/// A candidate phrase: lower-cased, possessives stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    tokens: Vec<String>,
}

impl Phrase {
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Split `text` into candidate noun phrases.
///
/// Runs longer than `max_tokens` are cut into consecutive pieces of at most
/// `max_tokens`. Single-token phrases are included; callers filter them.
/// Output is deduplicated, first occurrence wins.
#[must_use]
pub fn noun_phrases(text: &str, max_tokens: usize) -> Vec<Phrase> {
    let max_tokens = max_tokens.max(1);
    let normalized = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");

    let mut seen = HashSet::new();
    let mut phrases = Vec::new();

    for clause in CLAUSE_BREAK.split(&normalized) {
        let mut run: Vec<String> = Vec::new();
        for raw in WORD.find_iter(clause) {
            let token = strip_possessive(raw.as_str());
            if token.is_empty() || is_break(token) {
                flush(&mut run, max_tokens, &mut seen, &mut phrases);
            } else {
                run.push(token.to_string());
            }
        }
        flush(&mut run, max_tokens, &mut seen, &mut phrases);
    }

    phrases
}

/// Lower-cased word tokens of `text` with possessives stripped, in order.
///
/// Used for title-overlap scoring, so it keeps function words.
#[must_use]
pub fn word_tokens(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    WORD.find_iter(&normalized)
        .map(|m| strip_possessive(m.as_str()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn flush(
    run: &mut Vec<String>,
    max_tokens: usize,
    seen: &mut HashSet<String>,
    phrases: &mut Vec<Phrase>,
) {
    for piece in run.chunks(max_tokens) {
        let phrase = Phrase {
            tokens: piece.to_vec(),
        };
        if seen.insert(phrase.text()) {
            phrases.push(phrase);
        }
    }
    run.clear();
}

fn strip_possessive(token: &str) -> &str {
    let token = token.strip_suffix("'s").unwrap_or(token);
    token.trim_end_matches(['\'', '-'])
}

fn is_break(token: &str) -> bool {
    FUNCTION_WORDS.contains(&token)
        || HEADLINE_VERBS.contains(&token)
        || token.chars().all(char::is_numeric)
        || (token.chars().count() > 4 && token.ends_with("ed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        noun_phrases(text, 4).iter().map(Phrase::text).collect()
    }

    #[test]
    fn verbs_and_prepositions_split_phrases() {
        assert_eq!(
            texts("Tesla recall issued for battery fault"),
            vec!["tesla recall", "battery fault"]
        );
    }

    #[test]
    fn headline_verb_breaks_subject_from_object() {
        assert_eq!(
            texts("Tesla unveils new AI interface"),
            vec!["tesla", "new ai interface"]
        );
    }

    #[test]
    fn possessives_are_stripped() {
        assert_eq!(
            texts("Apple's supply chain and investors' concerns"),
            vec!["apple supply chain", "investors concerns"]
        );
    }

    #[test]
    fn curly_apostrophe_possessive_is_stripped() {
        assert_eq!(texts("Apple\u{2019}s chip plant"), vec!["apple chip plant"]);
    }

    #[test]
    fn punctuation_ends_a_clause() {
        assert_eq!(
            texts("Strong demand, record deliveries"),
            vec!["strong demand", "record deliveries"]
        );
    }

    #[test]
    fn long_runs_are_chunked() {
        let phrases = noun_phrases("alpha beta gamma delta epsilon zeta", 4);
        let lens: Vec<usize> = phrases.iter().map(Phrase::len).collect();
        assert_eq!(lens, vec![4, 2]);
    }

    #[test]
    fn duplicates_are_removed_in_first_seen_order() {
        assert_eq!(
            texts("battery fault. Another battery fault"),
            vec!["battery fault", "another battery fault"]
        );
        assert_eq!(texts("battery fault; battery fault"), vec!["battery fault"]);
    }

    #[test]
    fn numbers_break_runs() {
        assert_eq!(texts("Q3 2025 earnings call"), vec!["q3", "earnings call"]);
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        assert_eq!(
            texts("self-driving software update"),
            vec!["self-driving software update"]
        );
    }

    #[test]
    fn empty_text_has_no_phrases() {
        assert!(noun_phrases("", 4).is_empty());
        assert!(noun_phrases("   ...  ", 4).is_empty());
    }

    #[test]
    fn accented_letters_stay_inside_words() {
        assert_eq!(texts("Quiet caf\u{e9} morning"), vec!["quiet caf\u{e9} morning"]);
        assert_eq!(
            texts("Se\u{f1}ora P\u{e9}rez, M\u{fc}nchen"),
            vec!["se\u{f1}ora p\u{e9}rez", "m\u{fc}nchen"]
        );
    }

    #[test]
    fn word_tokens_handle_non_ascii_names() {
        assert_eq!(word_tokens("Se\u{f1}ora P\u{e9}rez"), vec!["se\u{f1}ora", "p\u{e9}rez"]);
    }

    #[test]
    fn word_tokens_keep_function_words() {
        assert_eq!(
            word_tokens("Tesla's recall for the fault"),
            vec!["tesla", "recall", "for", "the", "fault"]
        );
    }
}
