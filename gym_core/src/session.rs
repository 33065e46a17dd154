//! Derived values of an execution session.
//!
//! Nothing here is stored: countdowns and elapsed times are computed from
//! start timestamps and the `now` passed in, so they never drift.

use crate::{format_duration, ExecutionStatus, Progress, SequenceEntry, Session, Summary};
use chrono::{DateTime, Utc};

impl Session {
    /// The entry at `current_item_index`, or None once past the end
    pub fn current_entry(&self) -> Option<&SequenceEntry> {
        self.workout.entry(self.current_item_index)
    }

    /// True for `Completed` and `Stopped`
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            ExecutionStatus::Completed | ExecutionStatus::Stopped
        )
    }

    /// Whole seconds since start, frozen at `paused_at` while paused
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        let until = self.paused_at.unwrap_or(now);
        (until - self.start_time).num_seconds()
    }

    /// Seconds left in the rest between sets, None unless resting
    ///
    /// Pausing does not hold this countdown; only elapsed time is frozen.
    pub fn remaining_set_break_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        if !self.is_on_set_break {
            return None;
        }
        let start = self.set_break_start_time?;
        let duration = self.set_break_duration_seconds?;
        let elapsed = (now - start).num_seconds();
        Some((i64::from(duration) - elapsed).max(0))
    }

    /// Seconds left on the current break entry, None unless on one
    pub fn remaining_regular_break_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        let SequenceEntry::Break(entry) = self.current_entry()? else {
            return None;
        };
        let start = self.regular_break_start_time?;
        let elapsed = (now - start).num_seconds();
        Some((i64::from(entry.duration_seconds) - elapsed).max(0))
    }

    /// Number of completed indices that point at exercise entries
    pub fn completed_exercise_count(&self) -> usize {
        self.completed_item_indices
            .iter()
            .filter_map(|&index| self.workout.entry(index))
            .filter(|entry| entry.is_exercise())
            .count()
    }
}

impl Progress {
    /// Position text, e.g. "Exercise 2 of 5"
    pub fn progress_text(&self) -> String {
        format!("Exercise {} of {}", self.current_index + 1, self.total_items)
    }

    /// Elapsed time as "2m 5s", clamped to what `format_duration` can show
    pub fn formatted_elapsed(&self) -> String {
        let seconds = u32::try_from(self.elapsed_seconds.max(0)).unwrap_or(u32::MAX);
        format_duration(seconds)
    }
}

impl Summary {
    pub fn final_status(&self) -> ExecutionStatus {
        if self.was_completed {
            ExecutionStatus::Completed
        } else {
            ExecutionStatus::Stopped
        }
    }

    /// Total duration as "12m 5s"
    pub fn formatted_duration(&self) -> String {
        let total = self.total_duration_seconds.max(0);
        format!("{}m {}s", total / 60, total % 60)
    }
}
