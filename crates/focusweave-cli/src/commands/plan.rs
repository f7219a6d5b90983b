use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Deserialize;

use focusweave_core::{
    compute_free_slots, expand_busy, plan_tasks, Preferences, RunSummary, TaskEstimate,
};

use super::{parse_busy, start_of_today, RawInterval};

#[derive(Args)]
pub struct PlanArgs {
    /// JSON request file: { tasks, busy?, preferences?, horizon_start?, horizon_days? }
    #[arg(long)]
    pub input: PathBuf,
    /// Horizon start (RFC 3339), overriding the request file; defaults to today 00:00 UTC
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,
    /// Print a run summary instead of the placement list
    #[arg(long)]
    pub summary: bool,
}

/// One scheduling request, the core's whole input in one document.
#[derive(Deserialize)]
struct PlanRequest {
    tasks: Vec<TaskEstimate>,
    #[serde(default)]
    busy: Vec<RawInterval>,
    #[serde(default)]
    preferences: Option<Preferences>,
    #[serde(default)]
    horizon_start: Option<DateTime<Utc>>,
    #[serde(default)]
    horizon_days: Option<i64>,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.input)?;
    let request: PlanRequest = serde_json::from_str(&content)?;

    let prefs = request.preferences.unwrap_or_else(Preferences::load_or_default);
    prefs.validate()?;

    let horizon_start = args.from.or(request.horizon_start).unwrap_or_else(start_of_today);
    let horizon_days = request.horizon_days.unwrap_or(prefs.horizon_days);

    let busy = expand_busy(&parse_busy(&request.busy), prefs.buffer_minutes);
    let tasks: Vec<TaskEstimate> = request.tasks.iter().map(TaskEstimate::clamped).collect();

    let slots = compute_free_slots(horizon_start, horizon_days, &prefs, &busy);
    let placements = plan_tasks(&tasks, &slots, &prefs, Utc::now());

    if args.summary {
        let summary = RunSummary::new(&tasks, &placements, horizon_start, horizon_days);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&placements)?);
    }
    Ok(())
}
