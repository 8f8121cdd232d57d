//! Sprout Core - Habit Similarity & Goal Progress Evaluation Engine
//!
//! This crate provides the computation core of the Sprout habit tracker:
//! duplicate detection for newly entered habits, and milestone/completeness
//! evaluation over habit-completion histories. Both engines are pure and
//! deterministic; storage and presentation are external collaborators.

pub mod config;
pub mod error;
pub mod id;
pub mod progress;
pub mod similarity;
pub mod validation;

pub use config::{SproutConfig, ValidationPolicy};
pub use error::{Result, SproutError};
pub use id::{GoalId, HabitId, Id, IdType};
pub use progress::{
    CompletionRecord, GoalDraft, GoalMetrics, HabitHistorySource, Impact, InMemoryHistory,
    MilestoneRecord, ProgressReport, StreakSummary, Suggestion,
};
pub use similarity::SimilarityVerdict;
pub use validation::EntryValidation;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        CompletionRecord, EntryValidation, GoalDraft, GoalId, GoalMetrics, HabitHistorySource,
        HabitId, Impact, InMemoryHistory, MilestoneRecord, ProgressReport, Result,
        SimilarityVerdict, SproutConfig, SproutError, StreakSummary, Suggestion, ValidationPolicy,
    };
}
