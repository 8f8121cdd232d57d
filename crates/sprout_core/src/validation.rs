//! Habit entry validation
//!
//! The entry form distinguishes three outcomes when a habit description is
//! committed: hard rejection (unusable input or a near-duplicate), a
//! non-blocking warning (moderate similarity, the user may proceed), and
//! silent acceptance. Thresholds and length bounds come from
//! [`ValidationPolicy`](crate::config::ValidationPolicy).

use serde::{Deserialize, Serialize};

use crate::config::ValidationPolicy;
use crate::similarity::{self, SimilarityVerdict};

/// Outcome of validating a committed habit description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryValidation {
    /// The entry is unusable and must not be saved
    Rejected { reason: String },

    /// The entry resembles an existing habit; the user may proceed
    Warning { verdict: SimilarityVerdict },

    /// Nothing to report
    Accepted,
}

impl EntryValidation {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Validate a committed habit description against the existing habits.
pub fn validate_entry<S: AsRef<str>>(
    candidate: &str,
    existing: &[S],
    policy: &ValidationPolicy,
) -> EntryValidation {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return EntryValidation::Rejected {
            reason: "habit description is empty".to_string(),
        };
    }

    let length = trimmed.chars().count();
    if length < policy.min_length {
        return EntryValidation::Rejected {
            reason: format!(
                "habit description needs at least {} characters",
                policy.min_length
            ),
        };
    }
    if length > policy.max_length {
        return EntryValidation::Rejected {
            reason: format!(
                "habit description can't exceed {} characters",
                policy.max_length
            ),
        };
    }
    if !trimmed.chars().any(char::is_alphanumeric) {
        return EntryValidation::Rejected {
            reason: "habit description needs at least one letter or number".to_string(),
        };
    }

    let verdict = similarity::evaluate(trimmed, existing);
    if verdict.confidence > policy.block_threshold {
        let matched = verdict.matched_habit.as_deref().unwrap_or("an existing habit");
        return EntryValidation::Rejected {
            reason: format!("too similar to \"{matched}\""),
        };
    }
    if verdict.confidence > policy.warn_threshold {
        return EntryValidation::Warning { verdict };
    }

    EntryValidation::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn policy() -> ValidationPolicy {
        ValidationPolicy::default()
    }

    #[test]
    fn test_rejects_unusable_input() {
        let existing = ["read 10 pages"];
        assert!(validate_entry("", &existing, &policy()).is_rejected());
        assert!(validate_entry("ab", &existing, &policy()).is_rejected());
        assert!(validate_entry(&"x".repeat(101), &existing, &policy()).is_rejected());
        assert!(validate_entry("!!! ???", &existing, &policy()).is_rejected());
    }

    #[test]
    fn test_rejects_near_duplicate() {
        let outcome = validate_entry("Read 10 Pages!", &["read 10 pages"], &policy());
        match outcome {
            EntryValidation::Rejected { reason } => {
                assert!(reason.contains("read 10 pages"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_category_overlap_warns_but_does_not_block() {
        // Category confidence is exactly 0.9: above the warn line, at the
        // block line, so the user may still proceed.
        let outcome = validate_entry("Morning gym workout", &["Evening exercise session"], &policy());
        match outcome {
            EntryValidation::Warning { verdict } => {
                assert_eq!(verdict.confidence, 0.9);
            }
            other => panic!("expected warning, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_distinct_habit() {
        let outcome = validate_entry("practice guitar chords", &["read 10 pages"], &policy());
        assert_eq!(outcome, EntryValidation::Accepted);
    }

    #[test]
    fn test_accepts_with_no_existing_habits() {
        let no_existing: [&str; 0] = [];
        let outcome = validate_entry("drink more water", &no_existing, &policy());
        assert_eq!(outcome, EntryValidation::Accepted);
    }
}
