//! Execution engine for guided workout sessions.
//!
//! This module turns a static workout definition into a live session:
//! - Position tracking over the ordered sequence
//! - Set counting and rest between sets for multi-set exercises
//! - Break timers, pause/resume, stop/complete accounting
//!
//! Every transition takes the previous session and returns a new one.

use crate::clock::{Clock, SystemClock};
use crate::{
    ExecutionError, ExecutionStatus, ExerciseConfiguration, Progress, SequenceEntry, Session,
    Summary, WorkoutDefinition,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Drives sessions using the time reported by its clock
#[derive(Clone, Debug, Default)]
pub struct ExecutionEngine<C: Clock = SystemClock> {
    clock: C,
}

impl ExecutionEngine<SystemClock> {
    /// Engine using the system time
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ExecutionEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Start executing a workout
    ///
    /// Fails with `WorkoutNotValid` when the workout has no exercise entries,
    /// no matter how many breaks it holds.
    pub fn start(&self, workout: Arc<WorkoutDefinition>) -> Result<Session, ExecutionError> {
        if workout.exercise_count() == 0 {
            tracing::warn!("Refusing to start workout '{}': no exercises", workout.id);
            return Err(ExecutionError::WorkoutNotValid);
        }

        let now = self.clock.now();
        let mut session = Session {
            id: Uuid::new_v4(),
            workout,
            start_time: now,
            current_item_index: 0,
            completed_item_indices: Vec::new(),
            status: ExecutionStatus::Active,
            paused_at: None,
            current_set: None,
            is_on_set_break: false,
            set_break_start_time: None,
            set_break_duration_seconds: None,
            regular_break_start_time: None,
        };
        enter_current_entry(&mut session, now);

        tracing::info!(
            "Started session {} for workout '{}' ({} entries)",
            session.id,
            session.workout.title,
            session.workout.len()
        );
        Ok(session)
    }

    /// Advance the session by one step
    ///
    /// ## Transition order
    ///
    /// 1. **Resting between sets**: end the rest and move to the next set.
    ///
    /// 2. **Multi-set exercise with sets left**: start the rest between sets
    ///    if one is configured, otherwise go straight to the next set.
    ///
    /// 3. **Otherwise**: the current entry is done. Record it as completed,
    ///    move to the next index and prepare that entry.
    ///
    /// Reaching `index == len` is valid ("just passed the last entry");
    /// going beyond it fails with `CannotAdvance`.
    pub fn advance(&self, session: &Session) -> Result<Session, ExecutionError> {
        if session.is_terminal() {
            tracing::warn!(
                "Session {} already ended as {:?}",
                session.id,
                session.status
            );
            return Err(ExecutionError::SessionNotActive);
        }
        if session.status != ExecutionStatus::Active {
            tracing::debug!(
                "Cannot advance session {} in status {:?}",
                session.id,
                session.status
            );
            return Err(ExecutionError::SessionNotActive);
        }

        let now = self.clock.now();
        let mut next = session.clone();

        // Rule 1: finish the rest between sets
        if next.is_on_set_break {
            next.is_on_set_break = false;
            next.set_break_start_time = None;
            next.set_break_duration_seconds = None;
            if let Some(set) = next.current_set {
                next.current_set = Some(set + 1);
            }
            tracing::debug!("Set break over, starting set {:?}", next.current_set);
            return Ok(next);
        }

        // Rule 2: a set that is not the last one was just finished
        if let (Some(SequenceEntry::Exercise(entry)), Some(current_set)) =
            (session.current_entry(), session.current_set)
        {
            if let ExerciseConfiguration::Repetitions {
                sets,
                rest_between_sets_seconds,
                ..
            } = entry.configuration
            {
                if current_set < sets {
                    match rest_between_sets_seconds {
                        Some(rest) if rest > 0 => {
                            next.is_on_set_break = true;
                            next.set_break_start_time = Some(now);
                            next.set_break_duration_seconds = Some(rest);
                            tracing::debug!(
                                "Set {} of {} done, resting {}s",
                                current_set,
                                sets,
                                rest
                            );
                        }
                        _ => {
                            next.current_set = Some(current_set + 1);
                            tracing::debug!(
                                "Set {} of {} done, no rest configured",
                                current_set,
                                sets
                            );
                        }
                    }
                    return Ok(next);
                }
            }
        }

        // Rule 3: move on to the next entry
        let total_items = session.workout.len();
        let next_index = session.current_item_index + 1;
        if next_index > total_items {
            tracing::warn!(
                "Session {} cannot advance past index {} of {}",
                session.id,
                session.current_item_index,
                total_items
            );
            return Err(ExecutionError::CannotAdvance);
        }

        next.completed_item_indices.push(session.current_item_index);
        next.current_item_index = next_index;
        next.current_set = None;
        next.is_on_set_break = false;
        next.set_break_start_time = None;
        next.set_break_duration_seconds = None;
        next.regular_break_start_time = None;
        enter_current_entry(&mut next, now);

        tracing::debug!(
            "Completed entry {}, now at {} of {}",
            session.current_item_index,
            next_index,
            total_items
        );
        Ok(next)
    }

    /// Pause the session; elapsed time freezes at the pause instant
    pub fn pause(&self, session: &Session) -> Session {
        let mut next = session.clone();
        next.status = ExecutionStatus::Paused;
        next.paused_at = Some(self.clock.now());
        tracing::info!("Paused session {}", session.id);
        next
    }

    pub fn resume(&self, session: &Session) -> Session {
        let mut next = session.clone();
        next.status = ExecutionStatus::Active;
        next.paused_at = None;
        tracing::info!("Resumed session {}", session.id);
        next
    }

    /// Stop early; only exercise entries actually passed count as completed
    pub fn stop(&self, session: Session) -> Summary {
        let completed_exercises = session.completed_exercise_count();
        let summary = self.summarize(&session, completed_exercises, false);
        tracing::info!(
            "Stopped session {} after {}s ({}/{} exercises)",
            session.id,
            summary.total_duration_seconds,
            summary.completed_exercises,
            summary.total_exercises
        );
        summary
    }

    /// Finish the session, reporting every exercise as completed
    ///
    /// The engine does not check `is_complete` first; callers that want to
    /// prevent early completion must check it themselves.
    pub fn complete(&self, session: Session) -> Summary {
        if !self.is_complete(&session) {
            tracing::warn!(
                "Completing session {} at entry {} of {}",
                session.id,
                session.current_item_index,
                session.workout.len()
            );
        }

        let total_exercises = session.workout.exercise_count();
        let summary = self.summarize(&session, total_exercises, true);
        tracing::info!(
            "Completed session {} in {}s",
            session.id,
            summary.total_duration_seconds
        );
        summary
    }

    fn summarize(
        &self,
        session: &Session,
        completed_exercises: usize,
        was_completed: bool,
    ) -> Summary {
        let end_time = self.clock.now();
        Summary {
            workout_title: session.workout.title.clone(),
            start_time: session.start_time,
            end_time,
            total_duration_seconds: (end_time - session.start_time).num_seconds(),
            completed_exercises,
            total_exercises: session.workout.exercise_count(),
            was_completed,
        }
    }

    pub fn progress(&self, session: &Session) -> Progress {
        let total_items = session.workout.len();
        let completed_items = session.completed_item_indices.len();
        let percent_complete = if total_items > 0 {
            completed_items as f64 / total_items as f64
        } else {
            0.0
        };

        let elapsed_seconds = session.elapsed_seconds(self.clock.now());
        let estimated_remaining_seconds =
            (i64::from(session.workout.estimated_duration_seconds) - elapsed_seconds).max(0);

        Progress {
            current_index: session.current_item_index,
            total_items,
            completed_items,
            remaining_items: total_items.saturating_sub(session.current_item_index),
            percent_complete,
            elapsed_seconds,
            estimated_remaining_seconds,
        }
    }

    /// Up to `count` entries strictly after the current one
    pub fn upcoming_entries<'a>(&self, session: &'a Session, count: usize) -> &'a [SequenceEntry] {
        let sequence = &session.workout.ordered_sequence;
        let start = session.current_item_index + 1;
        if start >= sequence.len() {
            return &[];
        }
        let end = start.saturating_add(count).min(sequence.len());
        &sequence[start..end]
    }

    pub fn is_complete(&self, session: &Session) -> bool {
        session.current_item_index >= session.workout.len()
    }

    pub fn remaining_set_break_seconds(&self, session: &Session) -> Option<i64> {
        session.remaining_set_break_seconds(self.clock.now())
    }

    pub fn remaining_regular_break_seconds(&self, session: &Session) -> Option<i64> {
        session.remaining_regular_break_seconds(self.clock.now())
    }
}

/// Prepare whichever entry just became current.
///
/// Multi-set repetition exercises start at set 1; break entries start their
/// timer. Runs on session creation and on every index advance.
fn enter_current_entry(session: &mut Session, now: DateTime<Utc>) {
    match session.current_entry() {
        Some(SequenceEntry::Exercise(entry)) if entry.configuration.is_multi_set() => {
            session.current_set = Some(1);
        }
        Some(SequenceEntry::Break(_)) => {
            session.regular_break_start_time = Some(now);
        }
        _ => {}
    }
}
