//! Milestone rule table
//!
//! A fixed, ordered set of growth milestones derived from aggregate
//! streak/consistency metrics. Keys are stable once shipped: unlock history
//! references them, so new milestones may only be appended.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::GoalMetrics;

/// One milestone in the rule table.
pub struct MilestoneDefinition {
    /// Stable identifier, referenced by recorded unlocks
    pub key: &'static str,
    /// Display title
    pub title: &'static str,
    /// First-person narrative shown when the milestone unlocks
    pub narrative: &'static str,
    condition: fn(&GoalMetrics) -> bool,
}

impl MilestoneDefinition {
    /// Whether current metrics satisfy the unlock condition.
    pub fn is_met(&self, metrics: &GoalMetrics) -> bool {
        (self.condition)(metrics)
    }
}

/// Milestones in presentation order. Each condition is independent; order
/// matters for display only.
pub const MILESTONES: &[MilestoneDefinition] = &[
    MilestoneDefinition {
        key: "seedling",
        title: "Seedling",
        narrative: "I showed up three days in a row. My first sprout broke through the soil.",
        condition: |m| m.max_current_streak >= 3,
    },
    MilestoneDefinition {
        key: "first_roots",
        title: "First Roots",
        narrative: "I kept at it most of this week. My roots are taking hold.",
        condition: |m| m.max_current_streak >= 7 || m.consistency_7 >= 60.0,
    },
    MilestoneDefinition {
        key: "growth_spurt",
        title: "Growth Spurt",
        narrative: "Ten completions in two weeks. I can feel the momentum building.",
        condition: |m| m.total_14 >= 10,
    },
    MilestoneDefinition {
        key: "branching_out",
        title: "Branching Out",
        narrative: "I was active on ten different days this fortnight. New branches everywhere.",
        condition: |m| m.unique_days_14 >= 10,
    },
    MilestoneDefinition {
        key: "bloom",
        title: "Bloom",
        narrative: "Two weeks without missing a day, and now I'm in full bloom.",
        condition: |m| m.max_current_streak >= 14 || m.total_30 >= 30,
    },
];

/// A milestone's evaluated state, handed to the dashboard.
///
/// Not persisted here; the caller decides whether to record a key as
/// permanently unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    pub key: CompactString,
    pub title: CompactString,
    pub unlocked: bool,
    pub narrative: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_stable() {
        let keys: Vec<&str> = MILESTONES.iter().map(|m| m.key).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys, deduped);
        assert_eq!(
            keys,
            vec!["seedling", "first_roots", "growth_spurt", "branching_out", "bloom"]
        );
    }

    #[test]
    fn test_seedling_condition() {
        let mut metrics = GoalMetrics::default();
        assert!(!MILESTONES[0].is_met(&metrics));
        metrics.max_current_streak = 3;
        assert!(MILESTONES[0].is_met(&metrics));
    }

    #[test]
    fn test_first_roots_either_condition() {
        let streaky = GoalMetrics {
            max_current_streak: 7,
            ..Default::default()
        };
        let consistent = GoalMetrics {
            consistency_7: 60.0,
            ..Default::default()
        };
        assert!(MILESTONES[1].is_met(&streaky));
        assert!(MILESTONES[1].is_met(&consistent));
    }

    #[test]
    fn test_bloom_either_condition() {
        let streaky = GoalMetrics {
            max_current_streak: 14,
            ..Default::default()
        };
        let prolific = GoalMetrics {
            total_30: 30,
            ..Default::default()
        };
        assert!(MILESTONES[4].is_met(&streaky));
        assert!(MILESTONES[4].is_met(&prolific));
    }
}
