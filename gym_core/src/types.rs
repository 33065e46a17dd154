//! Core domain types for guided workout execution.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and muscle groups of the exercise library
//! - Workout definitions (ordered exercise and break entries)
//! - Live execution sessions and their status
//! - Derived progress and terminal summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Exercise Library Types
// ============================================================================

/// Muscle group an exercise primarily works
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    Glutes,
    Forearms,
    Calves,
    FullBody,
}

impl MuscleGroup {
    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::FullBody => "Full Body",
        }
    }
}

/// An exercise in the user's library (e.g., "Push-up")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroup>,
    #[serde(default)]
    pub video_url: Option<String>,
}

// ============================================================================
// Workout Definition Types
// ============================================================================

/// Opaque reference to an exercise in the library.
///
/// The engine only carries it along; it never resolves it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ExerciseRef(pub String);

impl ExerciseRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an exercise entry is measured
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationType {
    Repetitions,
    Time,
}

/// Configuration of an exercise within a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExerciseConfiguration {
    /// Set/rep based work, optionally with rest between sets
    Repetitions {
        sets: u32,
        reps_per_set: u32,
        #[serde(default)]
        rest_between_sets_seconds: Option<u32>,
    },
    /// Work for a fixed duration
    Time { duration_seconds: u32 },
}

/// An exercise placed in a workout sequence
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub exercise_ref: ExerciseRef,
    pub position: u32,
    pub configuration: ExerciseConfiguration,
}

/// A fixed-duration rest placed in a workout sequence
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakEntry {
    pub position: u32,
    pub duration_seconds: u32,
}

/// One step of a workout: either an exercise or a break
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceEntry {
    Exercise(ExerciseEntry),
    Break(BreakEntry),
}

/// A workout ready for execution.
///
/// Entries are kept sorted by position. The engine only ever reads it.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WorkoutDefinition {
    pub id: String,
    pub title: String,
    pub ordered_sequence: Vec<SequenceEntry>,
    pub estimated_duration_seconds: u32,
}

/// Authoring-side description of a workout, as found in configuration files.
///
/// Entries may appear in any order; positions decide the sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub entries: Vec<SequenceEntry>,
}

// ============================================================================
// Session Types
// ============================================================================

/// Lifecycle status of an execution session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Active,
    Paused,
    Completed,
    Stopped,
}

/// Live state of a workout being executed.
///
/// Every engine transition returns a fresh value; the returned session is
/// the only authoritative state going forward.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    pub workout: Arc<WorkoutDefinition>,
    pub start_time: DateTime<Utc>,
    pub current_item_index: usize,
    pub completed_item_indices: Vec<usize>,
    pub status: ExecutionStatus,
    pub paused_at: Option<DateTime<Utc>>,

    // Set tracking for multi-set repetition exercises
    pub current_set: Option<u32>,
    pub is_on_set_break: bool,
    pub set_break_start_time: Option<DateTime<Utc>>,
    pub set_break_duration_seconds: Option<u32>,

    // Timer for a break entry in the sequence
    pub regular_break_start_time: Option<DateTime<Utc>>,
}

/// Progress snapshot, recomputed on demand
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Progress {
    pub current_index: usize,
    pub total_items: usize,
    pub completed_items: usize,
    pub remaining_items: usize,
    pub percent_complete: f64,
    pub elapsed_seconds: i64,
    pub estimated_remaining_seconds: i64,
}

/// Final report produced when a session is stopped or completed
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Summary {
    pub workout_title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_duration_seconds: i64,
    pub completed_exercises: usize,
    pub total_exercises: usize,
    /// true if finished, false if stopped early
    pub was_completed: bool,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The exercise library plus the workouts built from it
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: HashMap<String, Exercise>,
    pub workouts: HashMap<String, Arc<WorkoutDefinition>>,
}
