//! Evaluate a sample goal the way the dashboard does: milestones,
//! completeness score, and enhancement suggestions in one pass.
//!
//! Run with `cargo run --example goal_dashboard`.

use std::collections::HashSet;

use chrono::NaiveDate;
use miette::Result;
use sprout_core::progress::{self, CompletionRecord, GoalDraft, InMemoryHistory};
use sprout_core::HabitId;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sprout_core=debug".into()),
        )
        .init();

    let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");

    // Two weeks of sample history: a steady reading habit and a spottier
    // stretching habit.
    let reading = HabitId::generate();
    let stretching = HabitId::generate();
    let history = InMemoryHistory::new(today)
        .with_habit(reading, days_completed(today, &[0, 1, 2, 3, 4, 6, 8, 9, 11, 13]))
        .with_habit(stretching, days_completed(today, &[0, 2, 5, 9]));

    // The caller owns unlock history; pretend "seedling" was banked earlier.
    let recorded: HashSet<String> = ["seedling".to_string()].into();

    let report = progress::evaluate(&[reading, stretching], &history, &recorded).await?;

    println!("metrics: {:#?}", report.metrics);
    for milestone in &report.milestones {
        let mark = if milestone.unlocked { "*" } else { " " };
        println!("[{mark}] {:<14} {}", milestone.title, milestone.narrative);
    }

    let goal = GoalDraft {
        title: "Read more, move more".to_string(),
        why: "Evenings disappear into my phone and I want them back.".to_string(),
        habit_titles: vec!["read 10 pages".to_string(), "stretch for 5 minutes".to_string()],
        obstacles: vec!["late work calls".to_string()],
        target_date: None,
    };

    println!("completeness: {}/100", progress::completeness_score(&goal));
    for suggestion in progress::suggestions(&goal) {
        println!("  {:?}: {} ({})", suggestion.impact, suggestion.action, suggestion.detail);
    }

    Ok(())
}

/// Completion records for `offsets` days before `today`.
fn days_completed(today: NaiveDate, offsets: &[u64]) -> Vec<CompletionRecord> {
    offsets
        .iter()
        .map(|&offset| CompletionRecord::new(today - chrono::Days::new(offset), true))
        .collect()
}
