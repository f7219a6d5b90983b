pub mod plan;
pub mod prefs;
pub mod slots;

use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;

use focusweave_core::Interval;

/// Raw time range as it appears in input files. Converted through
/// `Interval::new` so degenerate ranges are dropped on ingest.
#[derive(Debug, Deserialize)]
pub struct RawInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub fn parse_busy(raw: &[RawInterval]) -> Vec<Interval> {
    raw.iter().filter_map(|r| Interval::new(r.start, r.end)).collect()
}

/// Start of the current UTC day.
pub fn start_of_today() -> DateTime<Utc> {
    Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc()
}
