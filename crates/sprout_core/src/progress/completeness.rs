//! Goal completeness scoring and enhancement suggestions
//!
//! A weighted rubric over how well-specified a goal is, independent of any
//! milestone state, plus a prioritized list of fixed improvement
//! suggestions derived from the same inputs.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A caller-assembled description of a goal, scored for completeness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    #[serde(default)]
    pub title: String,

    /// The motivational "why" narrative behind the goal
    #[serde(default)]
    pub why: String,

    /// Titles of the habits attached to the goal
    #[serde(default)]
    pub habit_titles: Vec<String>,

    /// Known obstacles the user has listed
    #[serde(default)]
    pub obstacles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

const BASE_SCORE: u32 = 20;
const TITLE_POINTS: u32 = 5;
const HABIT_POINTS: u32 = 8;
const HABIT_CAP: u32 = 25;
const WHY_POINTS: u32 = 10;
const OBSTACLE_POINTS: u32 = 5;
const OBSTACLE_CAP: u32 = 15;
const TARGET_DATE_POINTS: u32 = 10;

/// Score how well-specified a goal is, on a 0-100 scale.
///
/// Monotonically non-decreasing in each input category independently:
/// adding habits, lengthening the why-statement, listing obstacles, or
/// setting a target date never lowers the score.
pub fn completeness_score(goal: &GoalDraft) -> u32 {
    let mut score = BASE_SCORE;

    let title_len = goal.title.chars().count();
    if title_len > 10 {
        score += TITLE_POINTS;
    }
    if title_len > 20 {
        score += TITLE_POINTS;
    }

    score += (goal.habit_titles.len() as u32 * HABIT_POINTS).min(HABIT_CAP);

    let why_len = goal.why.chars().count();
    if why_len > 20 {
        score += WHY_POINTS;
    }
    if why_len > 100 {
        score += WHY_POINTS;
    }

    score += (goal.obstacles.len() as u32 * OBSTACLE_POINTS).min(OBSTACLE_CAP);

    if goal.target_date.is_some() {
        score += TARGET_DATE_POINTS;
    }

    score.min(100)
}

/// How much a suggestion is expected to move the goal forward.
///
/// Declaration order doubles as sort order: High sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One improvement the user could make to their goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub impact: Impact,
    /// Short imperative label for the dashboard
    pub action: String,
    /// One-sentence explanation
    pub detail: String,
}

impl Suggestion {
    fn new(impact: Impact, action: &str, detail: &str) -> Self {
        Self {
            impact,
            action: action.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Ratio of unique words across habit titles; low values mean the habits
/// all say roughly the same thing.
fn word_uniqueness(titles: &[String]) -> f64 {
    let words: Vec<String> = titles
        .iter()
        .flat_map(|title| title.to_lowercase().split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();
    if words.is_empty() {
        return 1.0;
    }
    let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
    unique.len() as f64 / words.len() as f64
}

/// Generate improvement suggestions for a goal, highest impact first.
///
/// Rules are fixed; sorting is stable, so suggestions of equal impact keep
/// their generation order.
pub fn suggestions(goal: &GoalDraft) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if goal.habit_titles.is_empty() {
        out.push(Suggestion::new(
            Impact::High,
            "add your first habit",
            "a goal needs at least one concrete habit to act on",
        ));
    } else if goal.habit_titles.len() < 3 {
        out.push(Suggestion::new(
            Impact::Medium,
            "add more habits",
            "two or three supporting habits make progress steadier",
        ));
    }

    if goal.why.chars().count() <= 20 {
        out.push(Suggestion::new(
            Impact::High,
            "define a deeper why",
            "a motivating reason keeps the goal alive on hard days",
        ));
    }

    if goal.obstacles.is_empty() {
        out.push(Suggestion::new(
            Impact::Medium,
            "identify obstacles",
            "naming what might get in the way makes it easier to plan around",
        ));
    }

    if goal.target_date.is_none() {
        out.push(Suggestion::new(
            Impact::Medium,
            "set a target date",
            "a date turns an intention into a commitment",
        ));
    }

    if goal.title.chars().count() <= 10 {
        out.push(Suggestion::new(
            Impact::Low,
            "improve the title",
            "a specific title makes the goal easier to picture",
        ));
    }

    if !goal.habit_titles.is_empty() && word_uniqueness(&goal.habit_titles) < 0.5 {
        out.push(Suggestion::new(
            Impact::Low,
            "diversify your habits",
            "habits that repeat the same words usually cover the same ground",
        ));
    }

    out.sort_by_key(|suggestion| suggestion.impact);
    out
}
