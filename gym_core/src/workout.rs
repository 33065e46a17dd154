//! Workout definitions and their per-entry estimates.
//!
//! A workout is an ordered sequence of exercise and break entries. Entries
//! carry their own position; the definition keeps them sorted by it and
//! precomputes an advisory duration estimate.

use crate::{
    BreakEntry, ConfigurationType, ExerciseConfiguration, ExerciseEntry, SequenceEntry,
    WorkoutDefinition, WorkoutTemplate,
};
use std::collections::HashSet;

/// Seconds assumed per repetition when estimating workout duration
pub const SECONDS_PER_REP: u32 = 3;

impl ExerciseConfiguration {
    pub fn configuration_type(&self) -> ConfigurationType {
        match self {
            ExerciseConfiguration::Repetitions { .. } => ConfigurationType::Repetitions,
            ExerciseConfiguration::Time { .. } => ConfigurationType::Time,
        }
    }

    /// Number of sets, for repetition-based work
    pub fn sets(&self) -> Option<u32> {
        match self {
            ExerciseConfiguration::Repetitions { sets, .. } => Some(*sets),
            ExerciseConfiguration::Time { .. } => None,
        }
    }

    /// True for repetition-based work with more than one set
    pub fn is_multi_set(&self) -> bool {
        matches!(self, ExerciseConfiguration::Repetitions { sets, .. } if *sets > 1)
    }

    /// Estimated duration: reps × sets × 3s plus the rest after each set
    pub fn estimated_duration_seconds(&self) -> u32 {
        match self {
            ExerciseConfiguration::Repetitions {
                sets,
                reps_per_set,
                rest_between_sets_seconds,
            } => {
                let set_time = reps_per_set.saturating_mul(SECONDS_PER_REP);
                let rest_time = rest_between_sets_seconds.unwrap_or(0).saturating_mul(*sets);
                set_time.saturating_mul(*sets).saturating_add(rest_time)
            }
            ExerciseConfiguration::Time { duration_seconds } => *duration_seconds,
        }
    }

    /// Short description, e.g. "3 sets × 10 reps" or "45s"
    pub fn summary(&self) -> String {
        match self {
            ExerciseConfiguration::Repetitions {
                sets, reps_per_set, ..
            } => format!("{} sets × {} reps", sets, reps_per_set),
            ExerciseConfiguration::Time { duration_seconds } => format!("{}s", duration_seconds),
        }
    }
}

impl SequenceEntry {
    pub fn position(&self) -> u32 {
        match self {
            SequenceEntry::Exercise(entry) => entry.position,
            SequenceEntry::Break(entry) => entry.position,
        }
    }

    pub fn is_exercise(&self) -> bool {
        matches!(self, SequenceEntry::Exercise(_))
    }

    pub fn as_exercise(&self) -> Option<&ExerciseEntry> {
        match self {
            SequenceEntry::Exercise(entry) => Some(entry),
            SequenceEntry::Break(_) => None,
        }
    }

    pub fn as_break(&self) -> Option<&BreakEntry> {
        match self {
            SequenceEntry::Exercise(_) => None,
            SequenceEntry::Break(entry) => Some(entry),
        }
    }

    pub fn estimated_duration_seconds(&self) -> u32 {
        match self {
            SequenceEntry::Exercise(entry) => entry.configuration.estimated_duration_seconds(),
            SequenceEntry::Break(entry) => entry.duration_seconds,
        }
    }
}

impl WorkoutDefinition {
    /// Build a definition from entries in any order.
    ///
    /// Entries are sorted by position (stable for equal positions) and the
    /// duration estimate is summed over all of them.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        entries: Vec<SequenceEntry>,
    ) -> Self {
        let mut ordered_sequence = entries;
        ordered_sequence.sort_by_key(|e| e.position());

        let estimated_duration_seconds = ordered_sequence
            .iter()
            .map(|e| e.estimated_duration_seconds())
            .fold(0u32, |acc, d| acc.saturating_add(d));

        Self {
            id: id.into(),
            title: title.into(),
            ordered_sequence,
            estimated_duration_seconds,
        }
    }

    /// Number of entries in the merged sequence (exercises and breaks)
    pub fn len(&self) -> usize {
        self.ordered_sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_sequence.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&SequenceEntry> {
        self.ordered_sequence.get(index)
    }

    /// Number of exercise entries; breaks are not counted
    pub fn exercise_count(&self) -> usize {
        self.ordered_sequence
            .iter()
            .filter(|e| e.is_exercise())
            .count()
    }

    /// Check the structural invariants of the sequence
    ///
    /// Returns a list of problems, or empty Vec if the workout is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.exercise_count() == 0 {
            errors.push(format!("Workout '{}' has no exercises", self.id));
        }

        let mut positions = HashSet::new();
        for entry in &self.ordered_sequence {
            if !positions.insert(entry.position()) {
                errors.push(format!(
                    "Workout '{}': duplicate position {}",
                    self.id,
                    entry.position()
                ));
            }

            match entry {
                SequenceEntry::Exercise(item) => match item.configuration {
                    ExerciseConfiguration::Repetitions {
                        sets, reps_per_set, ..
                    } => {
                        if sets < 1 {
                            errors.push(format!(
                                "Workout '{}': exercise '{}' has zero sets",
                                self.id, item.exercise_ref
                            ));
                        }
                        if reps_per_set < 1 {
                            errors.push(format!(
                                "Workout '{}': exercise '{}' has zero reps per set",
                                self.id, item.exercise_ref
                            ));
                        }
                    }
                    ExerciseConfiguration::Time { duration_seconds } => {
                        if duration_seconds < 1 {
                            errors.push(format!(
                                "Workout '{}': exercise '{}' has zero duration",
                                self.id, item.exercise_ref
                            ));
                        }
                    }
                },
                SequenceEntry::Break(item) => {
                    if item.duration_seconds < 1 {
                        errors.push(format!(
                            "Workout '{}': break at position {} has zero duration",
                            self.id, item.position
                        ));
                    }
                }
            }
        }

        errors
    }
}

impl From<WorkoutTemplate> for WorkoutDefinition {
    fn from(template: WorkoutTemplate) -> Self {
        WorkoutDefinition::new(template.id, template.title, template.entries)
    }
}

/// Format seconds as "2m 5s", or "45s" below one minute
pub fn format_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExerciseRef;

    fn reps(
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

    fn rest(position: u32, duration_seconds: u32) -> SequenceEntry {
        SequenceEntry::Break(BreakEntry {
            position,
            duration_seconds,
        })
    }

    #[test]
    fn test_entries_sorted_by_position() {
        let workout = WorkoutDefinition::new(
            "w",
            "Mixed",
            vec![
                rest(1, 30),
                reps("squat", 2, 1, 10, None),
                reps("push_up", 0, 1, 10, None),
            ],
        );

        let positions: Vec<u32> = workout
            .ordered_sequence
            .iter()
            .map(|e| e.position())
            .collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(workout.ordered_sequence[0].is_exercise());
        assert!(workout.ordered_sequence[1].as_break().is_some());
    }

    #[test]
    fn test_estimated_duration() {
        // 3 sets × 10 reps × 3s + 60s × 3 = 270; 45s plank; 30s break
        let workout = WorkoutDefinition::new(
            "w",
            "Estimate",
            vec![
                reps("push_up", 0, 3, 10, Some(60)),
                SequenceEntry::Exercise(ExerciseEntry {
                    exercise_ref: ExerciseRef::new("plank"),
                    position: 1,
                    configuration: ExerciseConfiguration::Time {
                        duration_seconds: 45,
                    },
                }),
                rest(2, 30),
            ],
        );

        assert_eq!(workout.estimated_duration_seconds, 270 + 45 + 30);
    }

    #[test]
    fn test_estimate_without_rest() {
        let config = ExerciseConfiguration::Repetitions {
            sets: 4,
            reps_per_set: 12,
            rest_between_sets_seconds: None,
        };
        assert_eq!(config.estimated_duration_seconds(), 144);
    }

    #[test]
    fn test_exercise_count_excludes_breaks() {
        let workout = WorkoutDefinition::new(
            "w",
            "Counts",
            vec![
                reps("a", 0, 1, 5, None),
                rest(1, 20),
                reps("b", 2, 2, 5, None),
                rest(3, 20),
            ],
        );
        assert_eq!(workout.len(), 4);
        assert_eq!(workout.exercise_count(), 2);
    }

    #[test]
    fn test_multi_set_detection() {
        let single = ExerciseConfiguration::Repetitions {
            sets: 1,
            reps_per_set: 10,
            rest_between_sets_seconds: Some(30),
        };
        let multi = ExerciseConfiguration::Repetitions {
            sets: 3,
            reps_per_set: 10,
            rest_between_sets_seconds: None,
        };
        let timed = ExerciseConfiguration::Time {
            duration_seconds: 60,
        };

        assert!(!single.is_multi_set());
        assert!(multi.is_multi_set());
        assert!(!timed.is_multi_set());
        assert_eq!(timed.configuration_type(), ConfigurationType::Time);
        assert_eq!(timed.sets(), None);
    }

    #[test]
    fn test_validate_reports_structural_problems() {
        let workout = WorkoutDefinition::new(
            "broken",
            "Broken",
            vec![reps("a", 0, 0, 10, None), rest(0, 0)],
        );
        let errors = workout.validate();

        assert!(errors.iter().any(|e| e.contains("zero sets")));
        assert!(errors.iter().any(|e| e.contains("duplicate position 0")));
        assert!(errors.iter().any(|e| e.contains("break at position 0")));
    }

    #[test]
    fn test_validate_all_break_workout() {
        let workout = WorkoutDefinition::new("rest", "Rest Day", vec![rest(0, 60)]);
        let errors = workout.validate();
        assert_eq!(errors, vec!["Workout 'rest' has no exercises".to_string()]);
    }

    #[test]
    fn test_configuration_summary() {
        let config = ExerciseConfiguration::Repetitions {
            sets: 3,
            reps_per_set: 10,
            rest_between_sets_seconds: Some(60),
        };
        assert_eq!(config.summary(), "3 sets × 10 reps");
        assert_eq!(
            ExerciseConfiguration::Time {
                duration_seconds: 45
            }
            .summary(),
            "45s"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(125), "2m 5s");
    }
}
