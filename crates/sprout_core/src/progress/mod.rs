//! Goal progress evaluation
//!
//! Aggregates per-habit completion histories into goal-level metrics and
//! evaluates the fixed milestone rule table against them. Fetches are issued
//! concurrently per habit and the evaluation waits for all of them before
//! aggregating, so no partial aggregates escape. Evaluations are idempotent:
//! the only caller-supplied state is the set of already-unlocked milestone
//! keys, which makes unlocks monotonic.

pub mod completeness;
pub mod milestones;
pub mod source;
pub mod streak;

pub use completeness::{GoalDraft, Impact, Suggestion, completeness_score, suggestions};
pub use milestones::{MILESTONES, MilestoneDefinition, MilestoneRecord};
pub use source::{CompletionRecord, HabitHistorySource, InMemoryHistory, StreakSummary};

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::id::HabitId;

/// Weekly-consistency window, used only for the consistency percentage.
const WINDOW_WEEK: u32 = 7;
/// Recent-activity window, used for totals and unique active days.
const WINDOW_RECENT: u32 = 14;
/// Monthly window, used for monthly totals.
const WINDOW_MONTH: u32 = 30;

/// Aggregate metrics across all habits of a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalMetrics {
    /// Best ongoing streak among the goal's habits
    pub max_current_streak: u32,
    /// Best historical streak among the goal's habits
    pub max_longest_streak: u32,
    /// Completions across all habits in the last 14 days
    pub total_14: u32,
    /// Completions across all habits in the last 30 days
    pub total_30: u32,
    /// Distinct days with at least one completion in the last 14 days
    pub unique_days_14: u32,
    /// Percentage of the last 7 days with at least one completion
    pub consistency_7: f64,
}

/// Evaluation output: every milestone's state plus the metrics behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub milestones: Vec<MilestoneRecord>,
    pub metrics: GoalMetrics,
}

/// Everything fetched for one habit before aggregation.
struct HabitSnapshot {
    streak: StreakSummary,
    week: Vec<CompletionRecord>,
    recent: Vec<CompletionRecord>,
    month: Vec<CompletionRecord>,
}

/// Evaluate a goal's progress from its habits' histories.
///
/// A streak-fetch failure for a single habit is substituted with a zero
/// streak and never aborts the evaluation; a completions-fetch failure
/// propagates as the evaluation's single error. Zero habits yields all-zero
/// metrics and no newly unlocked milestones.
pub async fn evaluate(
    habit_ids: &[HabitId],
    source: &impl HabitHistorySource,
    already_unlocked: &HashSet<String>,
) -> Result<ProgressReport> {
    let fetches = habit_ids.iter().map(|id| fetch_habit(id, source));
    let habits = futures::future::try_join_all(fetches).await?;

    let metrics = aggregate(&habits);
    let milestones = MILESTONES
        .iter()
        .map(|definition| MilestoneRecord {
            key: definition.key.into(),
            title: definition.title.into(),
            unlocked: definition.is_met(&metrics) || already_unlocked.contains(definition.key),
            narrative: definition.narrative.to_string(),
        })
        .collect();

    debug!(
        habits = habit_ids.len(),
        max_current_streak = metrics.max_current_streak,
        consistency_7 = metrics.consistency_7,
        "goal progress evaluated"
    );

    Ok(ProgressReport { milestones, metrics })
}

/// Fetch one habit's streak and completion windows concurrently.
async fn fetch_habit(id: &HabitId, source: &impl HabitHistorySource) -> Result<HabitSnapshot> {
    let (streak, week, recent, month) = tokio::join!(
        source.streak(id),
        source.completions(id, WINDOW_WEEK),
        source.completions(id, WINDOW_RECENT),
        source.completions(id, WINDOW_MONTH),
    );

    // One habit's missing streak must not sink the whole evaluation.
    let streak = match streak {
        Ok(summary) => summary,
        Err(error) => {
            warn!(habit_id = %id, %error, "streak fetch failed, substituting zero streak");
            StreakSummary::default()
        }
    };

    Ok(HabitSnapshot {
        streak,
        week: week?,
        recent: recent?,
        month: month?,
    })
}

fn aggregate(habits: &[HabitSnapshot]) -> GoalMetrics {
    let mut metrics = GoalMetrics::default();
    let mut active_days_week: HashSet<NaiveDate> = HashSet::new();
    let mut active_days_recent: HashSet<NaiveDate> = HashSet::new();

    for snapshot in habits {
        metrics.max_current_streak = metrics.max_current_streak.max(snapshot.streak.current);
        metrics.max_longest_streak = metrics.max_longest_streak.max(snapshot.streak.longest);

        metrics.total_14 += completed_count(&snapshot.recent);
        metrics.total_30 += completed_count(&snapshot.month);

        active_days_week.extend(completed_dates(&snapshot.week));
        active_days_recent.extend(completed_dates(&snapshot.recent));
    }

    metrics.unique_days_14 = active_days_recent.len() as u32;
    metrics.consistency_7 = active_days_week.len() as f64 / f64::from(WINDOW_WEEK) * 100.0;
    metrics
}

fn completed_count(records: &[CompletionRecord]) -> u32 {
    records.iter().filter(|record| record.completed).count() as u32
}

fn completed_dates(records: &[CompletionRecord]) -> impl Iterator<Item = NaiveDate> + '_ {
    records
        .iter()
        .filter(|record| record.completed)
        .map(|record| record.date)
}
