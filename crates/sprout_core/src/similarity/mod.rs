//! Habit similarity engine
//!
//! Decides whether a newly entered habit duplicates or closely resembles an
//! existing one. Three passes over the existing habits, strongest signal
//! first:
//!
//! 1. Exact match on normalized text — confidence 1.0
//! 2. Shared activity category — confidence 0.9
//! 3. Weighted lexical score (edit distance + keyword overlap) — the best
//!    score wins, and only above [`SIMILAR_THRESHOLD`] is the pair flagged
//!
//! The engine is a pure function of its inputs: no I/O, no suspension
//! points, safe to call on every keystroke commit.

pub mod category;
pub mod metrics;
pub mod normalize;

pub use category::{CATEGORIES, Category, categorize};
pub use metrics::{edit_ratio, jaccard, levenshtein};
pub use normalize::{keywords, normalize};

use serde::{Deserialize, Serialize};

/// Weight of the edit-distance term in the combined score.
pub const EDIT_WEIGHT: f64 = 0.6;
/// Weight of the keyword-overlap term in the combined score.
pub const KEYWORD_WEIGHT: f64 = 0.4;
/// Combined scores above this are flagged as similar.
pub const SIMILAR_THRESHOLD: f64 = 0.65;
/// Confidence reported for a shared-category match.
pub const CATEGORY_CONFIDENCE: f64 = 0.9;

/// Edit ratios above this read as "very similar wording".
const WORDING_THRESHOLD: f64 = 0.8;
/// Keyword overlaps above this read as "same key activities".
const ACTIVITY_THRESHOLD: f64 = 0.7;

/// The outcome of comparing a candidate habit against existing ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityVerdict {
    /// Whether the candidate reads as a duplicate or near-duplicate
    pub is_similar: bool,

    /// The existing habit (original text) the candidate matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_habit: Option<String>,

    /// Why the match fired, phrased for the entry form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Best score found in [0, 1]; exactly 1.0 only for exact matches
    pub confidence: f64,
}

impl SimilarityVerdict {
    /// The zero-confidence "nothing matched" verdict.
    pub fn none() -> Self {
        Self {
            is_similar: false,
            matched_habit: None,
            reason: None,
            confidence: 0.0,
        }
    }
}

/// The winning lexical comparison, tracked across the scoring pass.
struct BestScore {
    matched: String,
    combined: f64,
    edit: f64,
    overlap: f64,
}

/// Compare `candidate` against every habit in `existing`.
///
/// Returns a verdict immediately (confidence 0.0) for an empty candidate or
/// an empty existing list. Ties in the scoring pass keep the first maximum
/// encountered, so iteration order over `existing` is part of the contract.
pub fn evaluate<S: AsRef<str>>(candidate: &str, existing: &[S]) -> SimilarityVerdict {
    let candidate = candidate.trim();
    if candidate.is_empty() || existing.is_empty() {
        return SimilarityVerdict::none();
    }

    let normalized_candidate = normalize(candidate);

    // Pass 1: exact match on normalized text.
    for entry in existing {
        if normalize(entry.as_ref()) == normalized_candidate {
            return SimilarityVerdict {
                is_similar: true,
                matched_habit: Some(entry.as_ref().to_string()),
                reason: Some("exact match ignoring case/punctuation".to_string()),
                confidence: 1.0,
            };
        }
    }

    // Pass 2: shared activity category. A category collision outranks raw
    // lexical similarity, so it short-circuits the scoring pass.
    if let Some(candidate_category) = categorize(&normalized_candidate) {
        for entry in existing {
            let normalized = normalize(entry.as_ref());
            let same_category =
                categorize(&normalized).is_some_and(|c| c.name == candidate_category.name);
            if same_category {
                return SimilarityVerdict {
                    is_similar: true,
                    matched_habit: Some(entry.as_ref().to_string()),
                    reason: Some(candidate_category.reason.to_string()),
                    confidence: CATEGORY_CONFIDENCE,
                };
            }
        }
    }

    // Pass 3: weighted lexical scoring. Strictly-greater comparison keeps
    // the earliest maximum; the reason is derived from the winner only.
    let candidate_keywords = keywords(&normalized_candidate);
    let mut best: Option<BestScore> = None;

    for entry in existing {
        let normalized = normalize(entry.as_ref());
        let edit = edit_ratio(&normalized_candidate, &normalized);
        let overlap = jaccard(&candidate_keywords, &keywords(&normalized));
        let combined = EDIT_WEIGHT * edit + KEYWORD_WEIGHT * overlap;

        if best.as_ref().is_none_or(|b| combined > b.combined) {
            best = Some(BestScore {
                matched: entry.as_ref().to_string(),
                combined,
                edit,
                overlap,
            });
        }
    }

    let Some(best) = best else {
        return SimilarityVerdict::none();
    };

    tracing::trace!(
        confidence = best.combined,
        matched = %best.matched,
        "similarity scan complete"
    );

    if best.combined > SIMILAR_THRESHOLD {
        let reason = if best.edit > WORDING_THRESHOLD {
            "very similar wording"
        } else if best.overlap > ACTIVITY_THRESHOLD {
            "same key activities"
        } else {
            "similar content"
        };
        SimilarityVerdict {
            is_similar: true,
            matched_habit: Some(best.matched),
            reason: Some(reason.to_string()),
            confidence: best.combined,
        }
    } else {
        SimilarityVerdict {
            is_similar: false,
            matched_habit: None,
            reason: None,
            confidence: best.combined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_inputs_short_circuit() {
        let no_existing: [&str; 0] = [];
        assert_eq!(evaluate("anything", &no_existing), SimilarityVerdict::none());
        assert_eq!(evaluate("", &["read 10 pages"]), SimilarityVerdict::none());
        assert_eq!(evaluate("   ", &["read 10 pages"]), SimilarityVerdict::none());
    }

    #[test]
    fn test_exact_match_normalized() {
        let verdict = evaluate("Read  10 Pages!", &["read 10 pages"]);
        assert!(verdict.is_similar);
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(verdict.matched_habit.as_deref(), Some("read 10 pages"));
        assert_eq!(
            verdict.reason.as_deref(),
            Some("exact match ignoring case/punctuation")
        );
    }

    #[test]
    fn test_exact_match_keeps_original_text() {
        let verdict = evaluate("walk the dog", &["Walk the Dog!!"]);
        assert_eq!(verdict.matched_habit.as_deref(), Some("Walk the Dog!!"));
    }

    #[test]
    fn test_category_short_circuit() {
        let verdict = evaluate("Morning gym workout", &["Evening exercise session"]);
        assert!(verdict.is_similar);
        assert_eq!(verdict.confidence, CATEGORY_CONFIDENCE);
        assert!(verdict.reason.unwrap().contains("exercise"));
    }

    #[test]
    fn test_category_is_symmetric() {
        let forward = evaluate("Morning gym workout", &["Evening exercise session"]);
        let backward = evaluate("Evening exercise session", &["Morning gym workout"]);
        assert_eq!(forward.confidence, backward.confidence);
        assert_eq!(forward.reason, backward.reason);
    }

    #[test]
    fn test_lexical_scoring_flags_close_wording() {
        let verdict = evaluate("drink two liters water", &["drink three liters water"]);
        assert!(verdict.is_similar);
        assert!(verdict.confidence > SIMILAR_THRESHOLD);
        assert!(verdict.confidence < 1.0);
        assert_eq!(
            verdict.matched_habit.as_deref(),
            Some("drink three liters water")
        );
    }

    #[test]
    fn test_low_score_reports_confidence_without_flagging() {
        let verdict = evaluate("drink more water", &["practice guitar chords"]);
        assert!(!verdict.is_similar);
        assert!(verdict.confidence > 0.0);
        assert!(verdict.confidence <= SIMILAR_THRESHOLD);
        assert_eq!(verdict.matched_habit, None);
        assert_eq!(verdict.reason, None);
    }

    #[test]
    fn test_tie_keeps_first_maximum() {
        // Both entries normalize to the same distance from the candidate;
        // the first one must win.
        let verdict = evaluate("water plants daily", &["water plants dailx", "water plants dailz"]);
        assert_eq!(
            verdict.matched_habit.as_deref(),
            Some("water plants dailx")
        );
    }

    #[test]
    fn test_confidence_one_reserved_for_exact() {
        let verdict = evaluate("drink two liters water", &["drink three liters water"]);
        assert!(verdict.confidence < 1.0);
    }
}
