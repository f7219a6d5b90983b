//! # Focusweave Core Library
//!
//! This library provides the core scheduling logic for Focusweave: booking
//! "focus time" for pending tasks by finding unoccupied slots in a calendar
//! and placing task-work chunks into them. The CLI binary is a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! The scheduler is a pure pipeline over caller-supplied values:
//!
//! - **Interval merger**: normalizes overlapping busy ranges into a minimal
//!   sorted set
//! - **Free-slot calculator**: subtracts merged busy time from each day's
//!   working window across the horizon
//! - **Task scorer**: orders tasks by stated priority plus due-date urgency
//! - **Greedy placer**: walks tasks in score order and allocates chunks into
//!   free slots, respecting chunk bounds and a daily focus budget
//!
//! The core performs no I/O and no calendar writes; callers supply already
//! buffer-expanded busy intervals and localized day boundaries, and consume
//! the resulting placements.
//!
//! ## Key Components
//!
//! - [`Interval`]: a busy or free time range
//! - [`Preferences`]: working-hour and chunking preferences for one run
//! - [`TaskEstimate`]: a task with estimated duration, chunk size, priority
//! - [`compute_free_slots`]: per-day free window computation
//! - [`plan_tasks`]: greedy chunk placement
//! - [`RunSummary`]: post-run statistics and under-scheduling detection

pub mod error;
pub mod interval;
pub mod planner;
pub mod prefs;
pub mod report;
pub mod scoring;
pub mod slots;
pub mod task;

pub use error::{PrefsError, ValidationError};
pub use interval::{expand_busy, merge_intervals, Interval};
pub use planner::{plan_tasks, Placement};
pub use prefs::Preferences;
pub use report::{RunSummary, TaskShortfall};
pub use scoring::{order_by_score, score};
pub use slots::{compute_free_slots, DaySlots};
pub use task::TaskEstimate;
