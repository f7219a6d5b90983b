//! Time intervals and interval merging.
//!
//! Busy time arrives as an unordered, possibly-overlapping set of ranges.
//! [`merge_intervals`] normalizes it into a minimal sorted set covering the
//! same total time, which the free-slot calculator then subtracts from each
//! day's working window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)`.
///
/// Invariant: `end > start`. Zero- or negative-length ranges are rejected at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    /// Create a new interval, returning `None` when `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if end <= start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check if this interval overlaps with a time range
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && self.end > start
    }

    /// Clip this interval to a window, returning `None` when nothing remains.
    pub fn clip(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        Self::new(self.start.max(start), self.end.min(end))
    }
}

/// Merge a set of intervals into a minimal sorted, non-overlapping set.
///
/// Intervals that touch (`next.start == current.end`) are treated as
/// contiguous and merged. Empty input yields empty output.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|iv| iv.start);

    let mut out: Vec<Interval> = Vec::with_capacity(intervals.len());
    let mut current = intervals[0];

    for iv in intervals.into_iter().skip(1) {
        if iv.start <= current.end {
            if iv.end > current.end {
                current.end = iv.end;
            }
        } else {
            out.push(current);
            current = iv;
        }
    }
    out.push(current);

    out
}

/// Widen each busy interval by `buffer_minutes` on both sides.
///
/// Buffering is a caller-side concern: the free-slot calculator and planner
/// expect already-expanded busy intervals and never apply the buffer
/// themselves.
pub fn expand_busy(busy: &[Interval], buffer_minutes: i64) -> Vec<Interval> {
    let buffer = Duration::minutes(buffer_minutes);
    busy.iter()
        .map(|iv| Interval {
            start: iv.start - buffer,
            end: iv.end + buffer,
        })
        .collect()
}
