//! Streak derivation from completion histories

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use super::source::{CompletionRecord, StreakSummary};

/// Derive current and longest streaks from a habit's completion records.
///
/// The current streak is the consecutive-day run ending today or yesterday
/// (a habit not yet done today hasn't broken its streak). The longest streak
/// is the best run anywhere in the history. Only `completed == true` records
/// count; duplicate dates collapse to one day.
pub fn derive(records: &[CompletionRecord], today: NaiveDate) -> StreakSummary {
    let completed: BTreeSet<NaiveDate> = records
        .iter()
        .filter(|record| record.completed)
        .map(|record| record.date)
        .collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &date in &completed {
        run = match previous {
            Some(p) if Some(date) == p.succ_opt() => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }

    let yesterday = today - Days::new(1);
    let anchor = [today, yesterday]
        .into_iter()
        .find(|day| completed.contains(day));

    let mut current = 0u32;
    if let Some(mut cursor) = anchor {
        while completed.contains(&cursor) {
            current += 1;
            match cursor.pred_opt() {
                Some(previous_day) => cursor = previous_day,
                None => break,
            }
        }
    }

    StreakSummary { current, longest }
}
