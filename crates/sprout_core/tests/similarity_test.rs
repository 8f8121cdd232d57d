//! End-to-end checks for the habit similarity engine and the entry-form
//! validation built on top of it.

use pretty_assertions::assert_eq;
use sprout_core::similarity::{self, SimilarityVerdict, normalize};
use sprout_core::validation::{EntryValidation, validate_entry};
use sprout_core::{SproutConfig, ValidationPolicy};

#[test]
fn normalization_is_idempotent() {
    let inputs = [
        "Read  10 Pages!",
        "GO TO THE GYM",
        "meditate: 5 minutes (morning)",
        "   ",
        "a the an of",
        "Drink 2L of water every day!!!",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn exact_match_scores_exactly_one() {
    let verdict = similarity::evaluate("Read  10 Pages!", &["read 10 pages"]);
    assert!(verdict.is_similar);
    assert_eq!(verdict.confidence, 1.0);
}

#[test]
fn category_overlap_scores_point_nine() {
    let verdict = similarity::evaluate("Morning gym workout", &["Evening exercise session"]);
    assert!(verdict.is_similar);
    assert_eq!(verdict.confidence, 0.9);
    assert!(verdict.reason.unwrap().contains("exercise"));
    assert_eq!(
        verdict.matched_habit.as_deref(),
        Some("Evening exercise session")
    );
}

#[test]
fn empty_existing_list_never_matches() {
    let no_existing: [&str; 0] = [];
    for candidate in ["", "read", "Morning gym workout"] {
        assert_eq!(
            similarity::evaluate(candidate, &no_existing),
            SimilarityVerdict::none()
        );
    }
}

#[test]
fn verdict_is_tested_in_both_directions() {
    // The edit-distance term is symmetric; the overall verdict is checked in
    // each direction on its own rather than assumed symmetric.
    let a = "walk the dog every morning";
    let b = "walk the dog each morning";

    let forward = similarity::evaluate(a, &[b]);
    let backward = similarity::evaluate(b, &[a]);
    assert!(forward.is_similar);
    assert!(backward.is_similar);
}

#[test]
fn moderate_similarity_warns_without_blocking() {
    let policy = ValidationPolicy::default();
    let outcome = validate_entry(
        "Morning gym workout",
        &["Evening exercise session"],
        &policy,
    );
    assert!(matches!(outcome, EntryValidation::Warning { .. }));
}

#[test]
fn near_duplicate_is_rejected() {
    let policy = ValidationPolicy::default();
    let outcome = validate_entry("read 10 pages", &["Read 10 Pages"], &policy);
    assert!(outcome.is_rejected());
}

#[test]
fn distinct_habit_is_accepted_under_default_config() {
    let config = SproutConfig::default();
    let outcome = validate_entry(
        "practice guitar chords",
        &["drink more water"],
        &config.validation,
    );
    assert_eq!(outcome, EntryValidation::Accepted);
}
