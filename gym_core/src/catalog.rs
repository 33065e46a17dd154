//! Default catalog of exercises and workouts.
//!
//! This module provides the built-in exercise library and sample workouts,
//! and merges user-defined entries from the configuration on top of them.

use crate::config::LibraryConfig;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn exercise(
    id: &str,
    title: &str,
    description: &str,
    muscle_groups: Vec<MuscleGroup>,
    video_url: Option<&str>,
) -> Exercise {
    Exercise {
        id: id.into(),
        title: title.into(),
        description: Some(description.into()),
        muscle_groups,
        video_url: video_url.map(Into::into),
    }
}

fn sets_of(
    id: &str,
    position: u32,
    sets: u32,
    reps_per_set: u32,
    rest: Option<u32>,
) -> SequenceEntry {
    SequenceEntry::Exercise(ExerciseEntry {
        exercise_ref: ExerciseRef::new(id),
        position,
        configuration: ExerciseConfiguration::Repetitions {
            sets,
            reps_per_set,
            rest_between_sets_seconds: rest,
        },
    })
}

fn timed(id: &str, position: u32, duration_seconds: u32) -> SequenceEntry {
    SequenceEntry::Exercise(ExerciseEntry {
        exercise_ref: ExerciseRef::new(id),
        position,
        configuration: ExerciseConfiguration::Time { duration_seconds },
    })
}

fn rest(position: u32, duration_seconds: u32) -> SequenceEntry {
    SequenceEntry::Break(BreakEntry {
        position,
        duration_seconds,
    })
}

/// Builds the default catalog with built-in exercises and workouts
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    let mut exercises = HashMap::new();
    let mut workouts = HashMap::new();

    // ========================================================================
    // Exercises
    // ========================================================================

    for item in [
        exercise(
            "push_up",
            "Push Up",
            "Hands under shoulders, lower the chest to the floor and press back up.",
            vec![MuscleGroup::Chest, MuscleGroup::Triceps, MuscleGroup::Shoulders],
            Some("https://www.youtube.com/watch?v=IODxDxX7oi4"),
        ),
        exercise(
            "squat",
            "Bodyweight Squat",
            "Feet shoulder width, sit back until thighs are parallel, stand up.",
            vec![MuscleGroup::Legs, MuscleGroup::Glutes],
            Some("https://www.youtube.com/watch?v=aclHkVaku9U"),
        ),
        exercise(
            "lunge",
            "Walking Lunge",
            "Step forward and lower the back knee towards the floor, alternate legs.",
            vec![MuscleGroup::Legs, MuscleGroup::Glutes],
            None,
        ),
        exercise(
            "pull_up",
            "Pull-up",
            "Hang from the bar and pull until the chin clears it.",
            vec![MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms],
            Some("https://www.youtube.com/watch?v=eGo4IYlbE5g"),
        ),
        exercise(
            "plank",
            "Plank",
            "Forearms on the floor, body in a straight line, hold.",
            vec![MuscleGroup::Core],
            None,
        ),
        exercise(
            "calf_raise",
            "Calf Raise",
            "Rise onto the balls of the feet and lower slowly.",
            vec![MuscleGroup::Calves],
            None,
        ),
        exercise(
            "jumping_jacks",
            "Jumping Jacks",
            "Jump feet apart while raising the arms overhead, then return.",
            vec![MuscleGroup::FullBody],
            None,
        ),
    ] {
        exercises.insert(item.id.clone(), item);
    }

    // ========================================================================
    // Workouts
    // ========================================================================

    for definition in [
        WorkoutDefinition::new(
            "full_body_starter",
            "Full Body Starter",
            vec![
                timed("jumping_jacks", 0, 60),
                rest(1, 30),
                sets_of("push_up", 2, 3, 10, Some(60)),
                sets_of("squat", 3, 3, 12, Some(60)),
                rest(4, 45),
                timed("plank", 5, 45),
            ],
        ),
        WorkoutDefinition::new(
            "upper_body",
            "Upper Body Strength",
            vec![
                sets_of("push_up", 0, 4, 12, Some(90)),
                rest(1, 60),
                sets_of("pull_up", 2, 3, 6, Some(120)),
            ],
        ),
        WorkoutDefinition::new(
            "quick_core",
            "Quick Core",
            vec![
                timed("plank", 0, 30),
                rest(1, 15),
                sets_of("calf_raise", 2, 2, 15, None),
                sets_of("lunge", 3, 1, 10, None),
            ],
        ),
    ] {
        workouts.insert(definition.id.clone(), Arc::new(definition));
    }

    Catalog {
        exercises,
        workouts,
    }
}

impl Catalog {
    /// Merge user-defined exercises and workouts on top of this catalog
    ///
    /// Entries with an existing id replace the built-in ones.
    pub fn with_library(mut self, library: &LibraryConfig) -> Self {
        for item in &library.exercises {
            if self.exercises.contains_key(&item.id) {
                tracing::info!("Custom exercise '{}' replaces built-in", item.id);
            }
            self.exercises.insert(item.id.clone(), item.clone());
        }

        for template in &library.workouts {
            if self.workouts.contains_key(&template.id) {
                tracing::info!("Custom workout '{}' replaces built-in", template.id);
            }
            let definition = WorkoutDefinition::from(template.clone());
            self.workouts.insert(definition.id.clone(), Arc::new(definition));
        }

        self
    }

    /// Look up a workout by id
    pub fn workout(&self, id: &str) -> Option<Arc<WorkoutDefinition>> {
        self.workouts.get(id).cloned()
    }

    /// Resolve the exercise an entry refers to
    pub fn exercise_for(&self, entry: &ExerciseEntry) -> Option<&Exercise> {
        self.exercises.get(entry.exercise_ref.as_str())
    }

    /// All workouts, sorted by id for stable listings
    pub fn sorted_workouts(&self) -> Vec<&Arc<WorkoutDefinition>> {
        let mut workouts: Vec<_> = self.workouts.values().collect();
        workouts.sort_by(|a, b| a.id.cmp(&b.id));
        workouts
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, item) in &self.exercises {
            if id.is_empty() || item.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if id != &item.id {
                errors.push(format!(
                    "Exercise key '{}' doesn't match exercise.id '{}'",
                    id, item.id
                ));
            }
            if item.title.trim().is_empty() {
                errors.push(format!("Exercise '{}' has empty title", id));
            }
        }

        for (id, workout) in &self.workouts {
            if id != &workout.id {
                errors.push(format!(
                    "Workout key '{}' doesn't match workout.id '{}'",
                    id, workout.id
                ));
            }
            if workout.title.trim().is_empty() {
                errors.push(format!("Workout '{}' has empty title", id));
            }

            errors.extend(workout.validate());

            // Check that all referenced exercises exist
            for entry in workout
                .ordered_sequence
                .iter()
                .filter_map(|e| e.as_exercise())
            {
                if self.exercise_for(entry).is_none() {
                    errors.push(format!(
                        "Workout '{}' references non-existent exercise '{}'",
                        id, entry.exercise_ref
                    ));
                }
            }
        }

        errors
    }
}
