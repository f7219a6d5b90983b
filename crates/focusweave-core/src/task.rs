//! Task estimates.
//!
//! A [`TaskEstimate`] is the scheduler's view of one pending task: an
//! estimated total duration, a preferred chunk size, and a 1-5 priority,
//! usually produced by an external estimation step. The estimator contract
//! clamps durations to 15-480 minutes, chunks to 15-120 and priority to 1-5
//! before values reach the planner; [`TaskEstimate::clamped`] applies the
//! same bounds for callers that bypass it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Estimator clamp bounds, minutes.
const DURATION_BOUNDS: (i64, i64) = (15, 480);
const CHUNK_BOUNDS: (i64, i64) = (15, 120);

/// One pending task with scheduling estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEstimate {
    /// Unique task identifier.
    pub id: String,
    pub title: String,
    /// Optional due timestamp; drives the urgency score.
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    /// Estimated total work, minutes.
    pub duration_minutes: i64,
    /// Preferred chunk size, minutes. Clamped into the preference bounds at
    /// placement time.
    pub chunk_minutes: i64,
    /// Stated priority, 1 (lowest) to 5 (highest).
    pub priority: u8,
}

impl TaskEstimate {
    /// Create a new task estimate.
    ///
    /// # Errors
    ///
    /// Returns an error when `duration_minutes` or `chunk_minutes` is not
    /// positive.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due: Option<DateTime<Utc>>,
        duration_minutes: i64,
        chunk_minutes: i64,
        priority: u8,
    ) -> Result<Self, ValidationError> {
        if duration_minutes <= 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_minutes".into(),
                message: format!("must be positive, got {duration_minutes}"),
            });
        }
        if chunk_minutes <= 0 {
            return Err(ValidationError::InvalidValue {
                field: "chunk_minutes".into(),
                message: format!("must be positive, got {chunk_minutes}"),
            });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            due,
            duration_minutes,
            chunk_minutes,
            priority,
        })
    }

    /// Return a copy with estimates clamped into the estimator contract's
    /// valid ranges: duration 15-480, chunk 15-120, priority 1-5.
    pub fn clamped(&self) -> Self {
        Self {
            duration_minutes: self.duration_minutes.clamp(DURATION_BOUNDS.0, DURATION_BOUNDS.1),
            chunk_minutes: self.chunk_minutes.clamp(CHUNK_BOUNDS.0, CHUNK_BOUNDS.1),
            priority: self.priority.clamp(1, 5),
            ..self.clone()
        }
    }
}
