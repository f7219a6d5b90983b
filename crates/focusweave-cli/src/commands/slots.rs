use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;

use focusweave_core::{compute_free_slots, expand_busy, Preferences};

use super::{parse_busy, start_of_today, RawInterval};

#[derive(Args)]
pub struct SlotsArgs {
    /// JSON file containing an array of busy intervals; omit for a free calendar
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Horizon start (RFC 3339); defaults to today 00:00 UTC
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,
    /// Horizon length in days; defaults to the preference value
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn run(args: SlotsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prefs = Preferences::load_or_default();
    prefs.validate()?;

    let busy = match &args.input {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let raw: Vec<RawInterval> = serde_json::from_str(&content)?;
            expand_busy(&parse_busy(&raw), prefs.buffer_minutes)
        }
        None => Vec::new(),
    };

    let horizon_start = args.from.unwrap_or_else(start_of_today);
    let horizon_days = args.days.unwrap_or(prefs.horizon_days);

    let slots = compute_free_slots(horizon_start, horizon_days, &prefs, &busy);
    println!("{}", serde_json::to_string_pretty(&slots)?);
    Ok(())
}
