//! Run summaries and under-scheduling detection.
//!
//! The placer degrades silently on infeasible input, so callers need a way
//! to see what actually landed. A [`RunSummary`] aggregates one run's
//! placements: how many chunks were scheduled, and which tasks received
//! fewer minutes than they requested.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::planner::Placement;
use crate::task::TaskEstimate;

/// A task that received fewer minutes than requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskShortfall {
    pub task_id: String,
    pub requested_minutes: i64,
    pub placed_minutes: i64,
}

/// Summary of one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub horizon_start: DateTime<Utc>,
    pub horizon_end: DateTime<Utc>,
    /// Number of chunks placed.
    pub scheduled: usize,
    /// Tasks whose placed minutes fall short of their requested duration,
    /// in input order.
    pub shortfalls: Vec<TaskShortfall>,
}

impl RunSummary {
    /// Summarize a run over its inputs and resulting placements.
    pub fn new(
        tasks: &[TaskEstimate],
        placements: &[Placement],
        horizon_start: DateTime<Utc>,
        horizon_days: i64,
    ) -> Self {
        let mut placed: HashMap<&str, i64> = HashMap::new();
        for p in placements {
            *placed.entry(p.task_id.as_str()).or_insert(0) += p.duration_minutes();
        }

        let shortfalls = tasks
            .iter()
            .filter_map(|t| {
                let placed_minutes = placed.get(t.id.as_str()).copied().unwrap_or(0);
                if placed_minutes < t.duration_minutes {
                    Some(TaskShortfall {
                        task_id: t.id.clone(),
                        requested_minutes: t.duration_minutes,
                        placed_minutes,
                    })
                } else {
                    None
                }
            })
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            horizon_start,
            horizon_end: horizon_start + Duration::days(horizon_days.max(0)),
            scheduled: placements.len(),
            shortfalls,
        }
    }

    /// Whether every task was fully placed.
    pub fn fully_scheduled(&self) -> bool {
        self.shortfalls.is_empty()
    }
}
