//! History source collaborator interface
//!
//! The progress evaluator never touches storage directly. It is handed a
//! [`HabitHistorySource`] capability with two read-only lookups, keyed by
//! habit ID. Any store can sit behind it; the bundled [`InMemoryHistory`]
//! serves tests and examples.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::HabitId;

use super::streak;

/// A single day's completion state for one habit.
///
/// Dates need not be contiguous; a missing date means "no data", not
/// "incomplete".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub date: NaiveDate,
    pub completed: bool,
}

impl CompletionRecord {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }
}

/// Current and longest consecutive-day completion counts for one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Ongoing run ending today or yesterday
    pub current: u32,
    /// Historical maximum run
    pub longest: u32,
}

/// Read-only completion history for habits, supplied by the storage layer.
#[async_trait]
pub trait HabitHistorySource: Send + Sync {
    /// Current and longest streaks for a habit.
    async fn streak(&self, id: &HabitId) -> Result<StreakSummary>;

    /// Completion records within the last `window_days` calendar days,
    /// inclusive of the reference "today".
    async fn completions(&self, id: &HabitId, window_days: u32) -> Result<Vec<CompletionRecord>>;
}

/// An in-memory [`HabitHistorySource`] over caller-loaded records.
///
/// Windows are measured against a fixed reference date handed in at
/// construction, which keeps evaluations reproducible.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    records: HashMap<HabitId, Vec<CompletionRecord>>,
    today: NaiveDate,
}

impl InMemoryHistory {
    /// Create an empty history with `today` as the reference date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: HashMap::new(),
            today,
        }
    }

    /// Builder method to add a habit's records.
    pub fn with_habit(mut self, id: HabitId, records: Vec<CompletionRecord>) -> Self {
        self.insert(id, records);
        self
    }

    /// Add or replace a habit's records.
    pub fn insert(&mut self, id: HabitId, records: Vec<CompletionRecord>) {
        self.records.insert(id, records);
    }

    /// The reference date windows are measured against.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

#[async_trait]
impl HabitHistorySource for InMemoryHistory {
    async fn streak(&self, id: &HabitId) -> Result<StreakSummary> {
        Ok(self
            .records
            .get(id)
            .map(|records| streak::derive(records, self.today))
            .unwrap_or_default())
    }

    async fn completions(&self, id: &HabitId, window_days: u32) -> Result<Vec<CompletionRecord>> {
        let Some(records) = self.records.get(id) else {
            return Ok(Vec::new());
        };
        let start = self.today - Days::new(u64::from(window_days.saturating_sub(1)));
        Ok(records
            .iter()
            .copied()
            .filter(|record| record.date >= start && record.date <= self.today)
            .collect())
    }
}
