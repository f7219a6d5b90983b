//! Greedy chunk placement into free slots.
//!
//! Walks tasks in score order and allocates chunks into the free slots
//! across the horizon:
//! - Effective chunk size is the task's preferred chunk clamped into the
//!   `[min_block, max_block]` preference bounds
//! - A per-day focus-minute accumulator enforces `max_daily_focus`
//! - Chunks never split across slot boundaries and never shrink below
//!   `min_block`; capacity too small for a minimum chunk is abandoned
//!
//! The placer never fails on infeasible input: tasks that cannot be fully
//! placed within the horizon are silently under-scheduled, detectable by the
//! caller via [`crate::report::RunSummary`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::prefs::Preferences;
use crate::scoring::order_by_score;
use crate::slots::DaySlots;
use crate::task::TaskEstimate;

/// One scheduled chunk of one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub task_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// 1-based index of this chunk within the task.
    pub chunk_index: u32,
    /// Total chunks expected for the task, `ceil(duration / effective chunk)`.
    /// Fixed per task even when fewer chunks end up placed.
    pub chunk_count: u32,
}

impl Placement {
    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Place tasks into free slots, highest score first.
///
/// Placements for a higher-scored task are emitted as a block before the
/// next task's, chronological within each task. Output may cover less than
/// the requested duration of any task (best-effort placement).
pub fn plan_tasks(
    tasks: &[TaskEstimate],
    day_slots: &[DaySlots],
    prefs: &Preferences,
    now: DateTime<Utc>,
) -> Vec<Placement> {
    let ordered = order_by_score(tasks, now);

    let mut placements = Vec::new();
    // Focus minutes already allocated per calendar day, shared by all tasks
    let mut used_focus: HashMap<NaiveDate, i64> = HashMap::new();

    for task in &ordered {
        let effective_chunk = task.chunk_minutes.clamp(prefs.min_block, prefs.max_block);
        let chunk_count = div_ceil(task.duration_minutes, effective_chunk) as u32;

        let mut remaining = task.duration_minutes;
        let mut chunk_index = 0u32;

        'days: for day in day_slots {
            if remaining <= 0 {
                break;
            }

            let day_key = day.day.date_naive();
            let used = used_focus.get(&day_key).copied().unwrap_or(0);
            if prefs.max_daily_focus - used < prefs.min_block {
                continue;
            }

            for slot in &day.slots {
                let mut cursor = slot.start;

                while cursor < slot.end && remaining > 0 {
                    let used = used_focus.get(&day_key).copied().unwrap_or(0);
                    let this_chunk = effective_chunk
                        .min(remaining)
                        .min(prefs.max_daily_focus - used);
                    // Abandon the slot rather than emit a sub-minimum chunk
                    if this_chunk < prefs.min_block {
                        break;
                    }

                    let end = cursor + Duration::minutes(this_chunk);
                    // Chunks never split across slot boundaries
                    if end > slot.end {
                        break;
                    }

                    chunk_index += 1;
                    placements.push(Placement {
                        task_id: task.id.clone(),
                        start: cursor,
                        end,
                        chunk_index,
                        chunk_count,
                    });
                    *used_focus.entry(day_key).or_insert(0) += this_chunk;
                    remaining -= this_chunk;
                    cursor = end;
                }

                if remaining <= 0 {
                    break 'days;
                }
            }
        }
    }

    placements
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::compute_free_slots;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    // 2026-03-02 is a Monday
    fn monday() -> DateTime<Utc> {
        at("2026-03-02T00:00:00Z")
    }

    fn task(id: &str, duration: i64, chunk: i64, priority: u8) -> TaskEstimate {
        TaskEstimate::new(id, format!("Task {id}"), None, duration, chunk, priority).unwrap()
    }

    #[test]
    fn single_task_lands_at_window_start() {
        let prefs = Preferences::default();
        let slots = compute_free_slots(monday(), 1, &prefs, &[]);
        let placements = plan_tasks(&[task("t1", 60, 60, 3)], &slots, &prefs, monday());

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].start, at("2026-03-02T09:00:00Z"));
        assert_eq!(placements[0].end, at("2026-03-02T10:00:00Z"));
        assert_eq!(placements[0].chunk_index, 1);
        assert_eq!(placements[0].chunk_count, 1);
    }

    #[test]
    fn daily_cap_pushes_lower_priority_to_next_day() {
        let mut prefs = Preferences::default();
        prefs.max_daily_focus = 60;
        let slots = compute_free_slots(monday(), 2, &prefs, &[]);

        let placements = plan_tasks(
            &[task("low", 60, 60, 1), task("high", 60, 60, 5)],
            &slots,
            &prefs,
            monday(),
        );

        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].task_id, "high");
        assert_eq!(placements[0].start, at("2026-03-02T09:00:00Z"));
        assert_eq!(placements[1].task_id, "low");
        assert_eq!(placements[1].start, at("2026-03-03T09:00:00Z"));
    }

    #[test]
    fn daily_cap_leaves_task_unscheduled_when_horizon_ends() {
        let mut prefs = Preferences::default();
        prefs.max_daily_focus = 60;
        let slots = compute_free_slots(monday(), 1, &prefs, &[]);

        let placements = plan_tasks(
            &[task("low", 60, 60, 1), task("high", 60, 60, 5)],
            &slots,
            &prefs,
            monday(),
        );

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].task_id, "high");
    }

    #[test]
    fn chunk_count_is_fixed_and_sub_minimum_tail_is_abandoned() {
        // duration 100, chunk 40, bounds [25, 90]: three chunks expected,
        // but the 20-minute tail is below min_block and never placed
        let mut prefs = Preferences::default();
        prefs.min_block = 25;
        prefs.max_block = 90;
        let slots = compute_free_slots(monday(), 5, &prefs, &[]);

        let placements = plan_tasks(&[task("t1", 100, 40, 3)], &slots, &prefs, monday());

        assert_eq!(placements.len(), 2);
        for p in &placements {
            assert_eq!(p.chunk_count, 3);
            assert_eq!(p.duration_minutes(), 40);
            assert!(p.duration_minutes() >= prefs.min_block);
            assert!(p.duration_minutes() <= prefs.max_block);
        }
        let placed: i64 = placements.iter().map(Placement::duration_minutes).sum();
        assert_eq!(placed, 80);
    }

    #[test]
    fn preferred_chunk_is_clamped_into_bounds() {
        let mut prefs = Preferences::default();
        prefs.min_block = 30;
        prefs.max_block = 45;
        let slots = compute_free_slots(monday(), 1, &prefs, &[]);

        // Preferred chunk 120 exceeds max_block
        let placements = plan_tasks(&[task("t1", 90, 120, 3)], &slots, &prefs, monday());
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].duration_minutes(), 45);
        assert_eq!(placements[1].duration_minutes(), 45);
    }

    #[test]
    fn chunks_do_not_split_across_slots() {
        let prefs = Preferences::default();
        // 12:00-13:00 busy: morning slot holds 09:00-12:00
        let busy = vec![
            crate::interval::Interval::new(at("2026-03-02T12:00:00Z"), at("2026-03-02T13:00:00Z"))
                .unwrap(),
        ];
        let slots = compute_free_slots(monday(), 1, &prefs, &busy);

        let placements = plan_tasks(&[task("t1", 240, 90, 3)], &slots, &prefs, monday());

        // 90 + 90 fit in the morning; the remaining 60 starts at 13:00
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0].start, at("2026-03-02T09:00:00Z"));
        assert_eq!(placements[1].start, at("2026-03-02T10:30:00Z"));
        assert_eq!(placements[2].start, at("2026-03-02T13:00:00Z"));
        assert_eq!(placements[2].duration_minutes(), 60);
        for p in &placements {
            let in_slot = slots[0]
                .slots
                .iter()
                .any(|s| p.start >= s.start && p.end <= s.end);
            assert!(in_slot, "placement must lie within one free slot");
        }
    }

    #[test]
    fn daily_cap_never_exceeded_across_tasks() {
        let mut prefs = Preferences::default();
        prefs.max_daily_focus = 120;
        let slots = compute_free_slots(monday(), 3, &prefs, &[]);

        let placements = plan_tasks(
            &[task("a", 180, 60, 5), task("b", 180, 60, 4), task("c", 180, 60, 3)],
            &slots,
            &prefs,
            monday(),
        );

        let mut per_day: HashMap<NaiveDate, i64> = HashMap::new();
        for p in &placements {
            *per_day.entry(p.start.date_naive()).or_insert(0) += p.duration_minutes();
        }
        for (day, minutes) in per_day {
            assert!(minutes <= 120, "day {day} exceeds cap with {minutes} minutes");
        }
    }

    #[test]
    fn higher_scored_task_emitted_as_a_block() {
        let prefs = Preferences::default();
        let slots = compute_free_slots(monday(), 2, &prefs, &[]);

        let placements = plan_tasks(
            &[task("b", 120, 60, 2), task("a", 120, 60, 4)],
            &slots,
            &prefs,
            monday(),
        );

        let ids: Vec<&str> = placements.iter().map(|p| p.task_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a", "b", "b"]);
    }

    #[test]
    fn empty_task_list_yields_no_placements() {
        let prefs = Preferences::default();
        let slots = compute_free_slots(monday(), 1, &prefs, &[]);
        assert!(plan_tasks(&[], &slots, &prefs, monday()).is_empty());
    }
}
