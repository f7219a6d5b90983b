//! Task priority scoring.
//!
//! `score = priority * 10 + urgency`, where urgency is 0 for due dates seven
//! or more days out and grows linearly as the due date approaches or passes.
//! Urgency is deliberately uncapped above: an overdue task keeps accumulating
//! urgency and can outrank any same-priority task.

use chrono::{DateTime, Utc};

use crate::task::TaskEstimate;

const URGENCY_WINDOW_DAYS: f64 = 7.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Compute the placement score for a task at a given time.
pub fn score(task: &TaskEstimate, now: DateTime<Utc>) -> f64 {
    let urgency = match task.due {
        Some(due) => {
            let days_until = (due - now).num_seconds() as f64 / SECONDS_PER_DAY;
            (URGENCY_WINDOW_DAYS - days_until).max(0.0)
        }
        None => 0.0,
    };
    f64::from(task.priority) * 10.0 + urgency
}

/// Order tasks by descending score.
///
/// The sort is stable: tasks with equal scores retain their input order.
pub fn order_by_score(tasks: &[TaskEstimate], now: DateTime<Utc>) -> Vec<TaskEstimate> {
    let mut scored: Vec<(f64, TaskEstimate)> =
        tasks.iter().map(|t| (score(t, now), t.clone())).collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(_, t)| t).collect()
}
