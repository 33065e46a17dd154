//! Integration tests for the gym binary.
//!
//! These tests verify end-to-end behavior including:
//! - Catalog listing and workout display
//! - Guided sessions driven automatically and through stdin
//! - Summary output (text and JSON)
//! - Custom workouts from a config file

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's config
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gym"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn summary_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("summary is valid JSON")
}

#[test]
fn test_cli_help() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guided workout runner"));
}

#[test]
fn test_list_shows_builtin_workouts() {
    let home = setup_test_dir();
    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("full_body_starter"))
        .stdout(predicate::str::contains("Quick Core"))
        .stdout(predicate::str::contains("Upper Body Strength"));
}

#[test]
fn test_show_prints_ordered_sequence() {
    let home = setup_test_dir();
    cli(&home)
        .arg("show")
        .arg("quick_core")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Plank - 30s"))
        .stdout(predicate::str::contains("2. Break - 15s"))
        .stdout(predicate::str::contains("3. Calf Raise - 2 sets × 15 reps"))
        .stdout(predicate::str::contains("4. Walking Lunge - 1 sets × 10 reps"));
}

#[test]
fn test_unknown_workout_fails() {
    let home = setup_test_dir();
    cli(&home)
        .arg("run")
        .arg("marathon")
        .arg("--auto-complete")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown workout: marathon"));
}

#[test]
fn test_auto_complete_run() {
    let home = setup_test_dir();
    cli(&home)
        .arg("run")
        .arg("quick_core")
        .arg("--auto-complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise 1 of 4"))
        .stdout(predicate::str::contains("Up next:"))
        .stdout(predicate::str::contains("WORKOUT COMPLETE"))
        .stdout(predicate::str::contains("Exercises: 3/3"));
}

#[test]
fn test_auto_complete_json_summary() {
    let home = setup_test_dir();
    let output = cli(&home)
        .arg("run")
        .arg("full_body_starter")
        .arg("--auto-complete")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = summary_json(&output);
    assert_eq!(summary["workout_title"], "Full Body Starter");
    assert_eq!(summary["was_completed"], true);
    assert_eq!(summary["completed_exercises"], 4);
    assert_eq!(summary["total_exercises"], 4);
}

#[test]
fn test_stop_after_counts_only_passed_exercises() {
    let home = setup_test_dir();
    // Plank, then the break: one exercise passed
    let output = cli(&home)
        .arg("run")
        .arg("quick_core")
        .arg("--stop-after")
        .arg("2")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = summary_json(&output);
    assert_eq!(summary["was_completed"], false);
    assert_eq!(summary["completed_exercises"], 1);
    assert_eq!(summary["total_exercises"], 3);
}

#[test]
fn test_interactive_run_to_completion() {
    let home = setup_test_dir();
    // plank, break, calf raise set 1, set 2, lunge
    cli(&home)
        .arg("run")
        .arg("quick_core")
        .write_stdin("\n\n\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Break: 15s left"))
        .stdout(predicate::str::contains("Set 1 of 2"))
        .stdout(predicate::str::contains("Set 2 of 2"))
        .stdout(predicate::str::contains("WORKOUT COMPLETE"));
}

#[test]
fn test_interactive_stop() {
    let home = setup_test_dir();
    cli(&home)
        .arg("run")
        .arg("quick_core")
        .write_stdin("\n\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("WORKOUT STOPPED"))
        .stdout(predicate::str::contains("Exercises: 1/3"));
}

#[test]
fn test_interactive_rest_between_sets() {
    let home = setup_test_dir();
    // First set of push ups done, then stop during the rest
    cli(&home)
        .arg("run")
        .arg("upper_body")
        .write_stdin("\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 1 of 4"))
        .stdout(predicate::str::contains("Rest between sets: 90s left"))
        .stdout(predicate::str::contains("Exercises: 0/2"));
}

#[test]
fn test_advance_while_paused_is_rejected() {
    let home = setup_test_dir();
    // pause, try to advance, resume, then end of input stops the session
    cli(&home)
        .arg("run")
        .arg("quick_core")
        .env("RUST_LOG", "info")
        .write_stdin("p\n\nr\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Paused]"))
        .stderr(predicate::str::contains("Session is not active"))
        .stderr(predicate::str::contains("Advance rejected for session"))
        .stdout(predicate::str::contains("WORKOUT STOPPED"))
        .stdout(predicate::str::contains("Exercises: 0/3"));
}

#[test]
fn test_custom_workout_from_config() {
    let home = setup_test_dir();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[execution]
upcoming_count = 1

[[library.workouts]]
id = "finisher"
title = "Finisher"

[[library.workouts.entries]]
kind = "exercise"
exercise_ref = "push_up"
position = 0
configuration = { type = "repetitions", sets = 2, reps_per_set = 20 }

[[library.workouts.entries]]
kind = "break"
position = 1
duration_seconds = 30

[[library.workouts.entries]]
kind = "exercise"
exercise_ref = "plank"
position = 2
configuration = { type = "time", duration_seconds = 60 }
"#,
    )
    .unwrap();

    let output = cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("run")
        .arg("finisher")
        .arg("--auto-complete")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = summary_json(&output);
    assert_eq!(summary["workout_title"], "Finisher");
    assert_eq!(summary["completed_exercises"], 2);
    assert_eq!(summary["total_exercises"], 2);
}

#[test]
fn test_config_from_xdg_home() {
    let home = setup_test_dir();
    let config_dir = home.path().join("gym");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[[library.workouts]]
id = "calves"
title = "Calf Day"

[[library.workouts.entries]]
kind = "exercise"
exercise_ref = "calf_raise"
position = 0
configuration = { type = "repetitions", sets = 1, reps_per_set = 25 }
"#,
    )
    .unwrap();

    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calf Day"));
}

#[test]
fn test_invalid_custom_workout_rejected() {
    let home = setup_test_dir();
    let config_path = home.path().join("broken.toml");
    fs::write(
        &config_path,
        r#"
[[library.workouts]]
id = "rest_only"
title = "Rest Only"

[[library.workouts.entries]]
kind = "break"
position = 0
duration_seconds = 60
"#,
    )
    .unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout 'rest_only' has no exercises"));
}
