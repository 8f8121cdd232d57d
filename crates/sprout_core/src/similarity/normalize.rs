//! Text normalization for habit descriptions
//!
//! All comparisons in the similarity engine run over normalized text:
//! lower-cased, punctuation stripped, whitespace collapsed, and a fixed set
//! of filler words (articles, prepositions, conjunctions) removed.
//! Normalization is idempotent and deterministic across runs.

use std::collections::HashSet;

/// Filler words stripped during normalization. Keyword extraction applies the
/// same list again, plus a short-token filter, so both stay in lockstep.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "to", "of", "in", "on", "at", "for", "with", "by",
    "from", "up", "into", "over", "after", "before",
];

/// Normalize a habit description for comparison.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the keyword token set used for overlap scoring.
///
/// Tokens of one or two characters carry no signal for habit descriptions
/// and are dropped along with the filler words.
pub fn keywords(normalized: &str) -> HashSet<String> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
