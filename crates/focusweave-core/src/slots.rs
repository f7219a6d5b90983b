//! Free-slot computation across a scheduling horizon.
//!
//! For each day in the horizon, subtracts merged busy intervals (clipped to
//! the day's working window) from the working window, producing the day's
//! free slots in chronological order. Days excluded by the workday
//! preferences yield no slots at all.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::{merge_intervals, Interval};
use crate::prefs::Preferences;

/// Free windows available on one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlots {
    /// Day boundary (start-of-day instant, caller-localized).
    pub day: DateTime<Utc>,
    /// Free intervals in chronological order, non-overlapping.
    pub slots: Vec<Interval>,
}

impl DaySlots {
    /// Total free minutes on this day.
    pub fn free_minutes(&self) -> i64 {
        self.slots.iter().map(Interval::duration_minutes).sum()
    }
}

/// Compute free slots for each day in `[horizon_start, horizon_start + horizon_days)`.
///
/// `busy` must already be buffer-expanded by the caller. A non-positive
/// `horizon_days` yields an empty result.
pub fn compute_free_slots(
    horizon_start: DateTime<Utc>,
    horizon_days: i64,
    prefs: &Preferences,
    busy: &[Interval],
) -> Vec<DaySlots> {
    let mut result = Vec::new();
    if horizon_days <= 0 {
        return result;
    }

    for offset in 0..horizon_days {
        let day = horizon_start + Duration::days(offset);

        if !prefs.is_workday(day) {
            result.push(DaySlots { day, slots: Vec::new() });
            continue;
        }

        let (day_start, day_end) = prefs.working_window(day);

        let todays_busy: Vec<Interval> = busy
            .iter()
            .filter(|b| b.overlaps(day_start, day_end))
            .filter_map(|b| b.clip(day_start, day_end))
            .collect();
        let merged = merge_intervals(todays_busy);

        result.push(DaySlots {
            day,
            slots: subtract_busy(day_start, day_end, &merged),
        });
    }

    result
}

/// Subtract sorted, merged busy intervals from the working window.
fn subtract_busy(
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    busy: &[Interval],
) -> Vec<Interval> {
    let mut free = Vec::new();
    let mut cursor = day_start;

    for b in busy {
        // Already behind the scan position (duplicate/contained interval)
        if b.end <= cursor {
            continue;
        }
        if b.start > cursor {
            if let Some(gap) = Interval::new(cursor, b.start.min(day_end)) {
                free.push(gap);
            }
        }
        cursor = cursor.max(b.end);
        if cursor >= day_end {
            break;
        }
    }

    if cursor < day_end {
        if let Some(tail) = Interval::new(cursor, day_end) {
            free.push(tail);
        }
    }

    free
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    // 2026-03-02 is a Monday
    fn monday() -> DateTime<Utc> {
        at("2026-03-02T00:00:00Z")
    }

    fn iv(start: &str, end: &str) -> Interval {
        Interval::new(at(start), at(end)).unwrap()
    }

    #[test]
    fn no_busy_yields_whole_working_window() {
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &[]);
        assert_eq!(slots.len(), 1);
        assert_eq!(
            slots[0].slots,
            vec![iv("2026-03-02T09:00:00Z", "2026-03-02T17:00:00Z")]
        );
    }

    #[test]
    fn lunch_meeting_splits_the_day() {
        let busy = vec![iv("2026-03-02T12:00:00Z", "2026-03-02T13:00:00Z")];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        assert_eq!(
            slots[0].slots,
            vec![
                iv("2026-03-02T09:00:00Z", "2026-03-02T12:00:00Z"),
                iv("2026-03-02T13:00:00Z", "2026-03-02T17:00:00Z"),
            ]
        );
    }

    #[test]
    fn weekend_day_has_no_slots() {
        // Horizon Mon..Sun; Sat (index 5) and Sun (index 6) are excluded
        let slots = compute_free_slots(monday(), 7, &Preferences::default(), &[]);
        assert_eq!(slots.len(), 7);
        assert!(slots[5].slots.is_empty());
        assert!(slots[6].slots.is_empty());
        assert!(!slots[4].slots.is_empty());
    }

    #[test]
    fn weekend_day_empty_even_without_busy_input() {
        let busy = vec![iv("2026-03-07T10:00:00Z", "2026-03-07T11:00:00Z")];
        let slots = compute_free_slots(at("2026-03-07T00:00:00Z"), 1, &Preferences::default(), &busy);
        assert!(slots[0].slots.is_empty());
    }

    #[test]
    fn include_weekends_opens_saturday() {
        let mut prefs = Preferences::default();
        prefs.include_weekends = true;
        let slots = compute_free_slots(at("2026-03-07T00:00:00Z"), 1, &prefs, &[]);
        assert_eq!(slots[0].slots.len(), 1);
    }

    #[test]
    fn busy_outside_window_is_ignored() {
        let busy = vec![
            iv("2026-03-02T06:00:00Z", "2026-03-02T08:00:00Z"),
            iv("2026-03-02T19:00:00Z", "2026-03-02T21:00:00Z"),
        ];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        assert_eq!(
            slots[0].slots,
            vec![iv("2026-03-02T09:00:00Z", "2026-03-02T17:00:00Z")]
        );
    }

    #[test]
    fn busy_spanning_window_edge_is_clipped() {
        let busy = vec![iv("2026-03-02T08:00:00Z", "2026-03-02T10:00:00Z")];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        assert_eq!(
            slots[0].slots,
            vec![iv("2026-03-02T10:00:00Z", "2026-03-02T17:00:00Z")]
        );
    }

    #[test]
    fn fully_busy_day_has_no_slots() {
        let busy = vec![iv("2026-03-02T08:00:00Z", "2026-03-02T18:00:00Z")];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        assert!(slots[0].slots.is_empty());
    }

    #[test]
    fn duplicate_busy_contributes_nothing() {
        let busy = vec![
            iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
            iv("2026-03-02T10:00:00Z", "2026-03-02T11:00:00Z"),
        ];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        assert_eq!(
            slots[0].slots,
            vec![
                iv("2026-03-02T09:00:00Z", "2026-03-02T10:00:00Z"),
                iv("2026-03-02T11:00:00Z", "2026-03-02T17:00:00Z"),
            ]
        );
    }

    #[test]
    fn non_positive_horizon_is_empty() {
        assert!(compute_free_slots(monday(), 0, &Preferences::default(), &[]).is_empty());
        assert!(compute_free_slots(monday(), -3, &Preferences::default(), &[]).is_empty());
    }

    #[test]
    fn slots_and_busy_are_disjoint() {
        let busy = vec![
            iv("2026-03-02T09:30:00Z", "2026-03-02T10:15:00Z"),
            iv("2026-03-02T14:00:00Z", "2026-03-02T15:30:00Z"),
        ];
        let slots = compute_free_slots(monday(), 1, &Preferences::default(), &busy);
        for slot in &slots[0].slots {
            for b in &busy {
                assert!(!slot.overlaps(b.start, b.end));
            }
        }
        let free: i64 = slots[0].free_minutes();
        let busy_total: i64 = busy.iter().map(Interval::duration_minutes).sum();
        assert_eq!(free + busy_total, 8 * 60);
    }
}
