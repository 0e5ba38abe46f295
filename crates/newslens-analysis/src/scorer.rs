//! General-purpose lexicon scorer for English news text.

/// Word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("good", 0.3),
    ("great", 0.4),
    ("excellent", 0.5),
    ("best", 0.5),
    ("better", 0.3),
    ("new", 0.2),
    ("strong", 0.3),
    ("growth", 0.3),
    ("gain", 0.3),
    ("gains", 0.3),
    ("success", 0.4),
    ("successful", 0.4),
    ("win", 0.4),
    ("wins", 0.4),
    ("innovative", 0.4),
    ("improve", 0.3),
    ("improved", 0.3),
    ("boost", 0.3),
    ("boosts", 0.3),
    ("surge", 0.3),
    ("surges", 0.3),
    ("soar", 0.4),
    ("soars", 0.4),
    ("rally", 0.3),
    ("profitable", 0.4),
    ("positive", 0.4),
    ("popular", 0.3),
    ("impressive", 0.4),
    ("exciting", 0.4),
    ("breakthrough", 0.4),
    ("award", 0.3),
    ("praised", 0.4),
    ("record", 0.2),
    ("expands", 0.2),
    ("leading", 0.2),
    ("advanced", 0.2),
    // Negative signals
    ("bad", -0.4),
    ("poor", -0.4),
    ("worse", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("fail", -0.4),
    ("fails", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("loss", -0.4),
    ("losses", -0.4),
    ("decline", -0.3),
    ("declines", -0.3),
    ("drop", -0.3),
    ("drops", -0.3),
    ("falls", -0.3),
    ("plunge", -0.5),
    ("plunges", -0.5),
    ("slump", -0.4),
    ("weak", -0.3),
    ("lawsuit", -0.5),
    ("sued", -0.5),
    ("fraud", -0.7),
    ("crash", -0.5),
    ("delay", -0.3),
    ("delays", -0.3),
    ("delayed", -0.3),
    ("layoffs", -0.5),
    ("warning", -0.4),
    ("risk", -0.3),
    ("problem", -0.3),
    ("crisis", -0.6),
    ("scandal", -0.6),
    ("ban", -0.5),
    ("banned", -0.5),
    ("dangerous", -0.6),
    ("negative", -0.4),
    ("fault", -0.4),
    ("defect", -0.4),
    ("criticism", -0.4),
    ("angry", -0.4),
];

/// Words that invert the weight of the word immediately after them.
const NEGATORS: &[&str] = &["not", "no", "never"];

/// A negated word contributes this multiple of its weight.
const NEGATION_FACTOR: f32 = -0.5;

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. A word preceded by a negator ("not", "no",
/// "never", or any "n't" contraction) contributes half its weight with the
/// sign flipped. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn polarity_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    let mut negated = false;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += if negated {
                weight * NEGATION_FACTOR
            } else {
                weight
            };
        }
        negated = is_negator(&w);
    }
    score.clamp(-1.0, 1.0)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}
