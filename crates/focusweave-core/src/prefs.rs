//! TOML-based scheduling preferences.
//!
//! Stores per-user scheduling preferences:
//! - Horizon length in days
//! - Working hours ("HH:MM" strings) and eligible weekdays
//! - Chunk size bounds and meeting buffer
//! - Daily focus-minute budget
//!
//! Preferences are stored at `~/.config/focusweave/prefs.toml`. A
//! `Preferences` value is supplied per scheduling run and is immutable
//! within a run.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PrefsError, ValidationError};

/// Scheduling preferences for one run.
///
/// All durations are minutes. Serialized to/from TOML at
/// `~/.config/focusweave/prefs.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: i64,
    /// Working window start, "HH:MM". Unparsable values fall back to 09:00.
    #[serde(default = "default_working_start")]
    pub working_start: String,
    /// Working window end, "HH:MM". Unparsable values fall back to 17:00.
    #[serde(default = "default_working_end")]
    pub working_end: String,
    /// Weekday names eligible for placement ("Mon".."Sun").
    #[serde(default = "default_workdays")]
    pub workdays: Vec<String>,
    /// When set, every day is eligible regardless of `workdays`.
    #[serde(default)]
    pub include_weekends: bool,
    #[serde(default = "default_min_block")]
    pub min_block: i64,
    #[serde(default = "default_max_block")]
    pub max_block: i64,
    /// Minutes to widen each busy interval on both sides before scheduling.
    #[serde(default = "default_buffer_minutes")]
    pub buffer_minutes: i64,
    /// Maximum focus minutes placed on any single day.
    #[serde(default = "default_max_daily_focus")]
    pub max_daily_focus: i64,
}

// Default functions
fn default_horizon_days() -> i64 {
    7
}
fn default_working_start() -> String {
    "09:00".into()
}
fn default_working_end() -> String {
    "17:00".into()
}
fn default_workdays() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri"]
        .iter()
        .map(|d| d.to_string())
        .collect()
}
fn default_min_block() -> i64 {
    25
}
fn default_max_block() -> i64 {
    90
}
fn default_buffer_minutes() -> i64 {
    10
}
fn default_max_daily_focus() -> i64 {
    240
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            horizon_days: default_horizon_days(),
            working_start: default_working_start(),
            working_end: default_working_end(),
            workdays: default_workdays(),
            include_weekends: false,
            min_block: default_min_block(),
            max_block: default_max_block(),
            buffer_minutes: default_buffer_minutes(),
            max_daily_focus: default_max_daily_focus(),
        }
    }
}

/// Returns `~/.config/focusweave[-dev]/` based on FOCUSWEAVE_ENV.
///
/// Set FOCUSWEAVE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, PrefsError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSWEAVE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusweave-dev")
    } else {
        base_dir.join("focusweave")
    };

    std::fs::create_dir_all(&dir).map_err(|e| PrefsError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

impl Preferences {
    fn path() -> Result<PathBuf, PrefsError> {
        Ok(data_dir()?.join("prefs.toml"))
    }

    /// Load from the default location, writing defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences file exists but cannot be parsed,
    /// or if the default preferences cannot be written to disk.
    pub fn load() -> Result<Self, PrefsError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| PrefsError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let prefs = Self::default();
                prefs.save()?;
                Ok(prefs)
            }
        }
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        let content = std::fs::read_to_string(path).map_err(|e| PrefsError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| PrefsError::ParseFailed(e.to_string()))
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save(&self) -> Result<(), PrefsError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| PrefsError::ParseFailed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| PrefsError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check structural invariants on the chunking preferences.
    ///
    /// # Errors
    ///
    /// Returns an error when `min_block > max_block`, either bound is
    /// non-positive, or `max_daily_focus < min_block` (no day could ever
    /// admit a placement).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_block <= 0 || self.max_block <= 0 {
            return Err(ValidationError::InvalidValue {
                field: "min_block/max_block".into(),
                message: "chunk bounds must be positive".into(),
            });
        }
        if self.min_block > self.max_block {
            return Err(ValidationError::InvalidValue {
                field: "min_block".into(),
                message: format!(
                    "min_block ({}) exceeds max_block ({})",
                    self.min_block, self.max_block
                ),
            });
        }
        if self.max_daily_focus < self.min_block {
            return Err(ValidationError::InvalidValue {
                field: "max_daily_focus".into(),
                message: format!(
                    "max_daily_focus ({}) is below min_block ({})",
                    self.max_daily_focus, self.min_block
                ),
            });
        }
        Ok(())
    }

    /// Check whether a day is eligible for placement.
    pub fn is_workday(&self, day: DateTime<Utc>) -> bool {
        self.include_weekends || self.workdays.iter().any(|d| d == weekday_name(day.weekday()))
    }

    /// Compute the working window for a day.
    ///
    /// Combines the day's date with `working_start`/`working_end`, defaulting
    /// to 09:00/17:00 when a value is unparsable.
    pub fn working_window(&self, day: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let (start_h, start_m) = parse_hm(&self.working_start).unwrap_or((9, 0));
        let (end_h, end_m) = parse_hm(&self.working_end).unwrap_or((17, 0));
        (at_time(day, start_h, start_m), at_time(day, end_h, end_m))
    }
}

/// Parse an "HH:MM" string. A missing minute component defaults to 0.
fn parse_hm(value: &str) -> Option<(u32, u32)> {
    let mut parts = value.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

fn at_time(day: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    day.with_hour(hour)
        .and_then(|d| d.with_minute(minute))
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(day)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
