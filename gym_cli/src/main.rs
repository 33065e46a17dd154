use clap::{Parser, Subcommand};
use gym_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "gym")]
#[command(about = "Guided workout runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available workouts
    List,

    /// Show the ordered sequence of a workout
    Show {
        /// Workout id (see `gym list`)
        workout: String,
    },

    /// Run a workout as a guided session
    Run {
        /// Workout id (see `gym list`)
        workout: String,

        /// Auto-complete (for testing) - advance until the workout is done
        #[arg(long, conflicts_with = "stop_after")]
        auto_complete: bool,

        /// Advance this many times, then stop the session
        #[arg(long)]
        stop_after: Option<usize>,

        /// Print only the final summary, as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    gym_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog = get_default_catalog().clone().with_library(&config.library);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Commands::List => cmd_list(&catalog),
        Commands::Show { workout } => cmd_show(&catalog, &workout),
        Commands::Run {
            workout,
            auto_complete,
            stop_after,
            json,
        } => {
            let mode = if auto_complete {
                RunMode::AutoComplete
            } else if let Some(limit) = stop_after {
                RunMode::StopAfter(limit)
            } else {
                RunMode::Interactive
            };
            cmd_run(&catalog, &workout, mode, json, &config)
        }
    }
}

fn find_workout(catalog: &Catalog, id: &str) -> Result<Arc<WorkoutDefinition>> {
    catalog.workout(id).ok_or_else(|| {
        eprintln!(
            "Unknown workout: {}. Run `gym list` to see available workouts.",
            id
        );
        Error::Other(format!("Unknown workout '{}'", id))
    })
}

fn cmd_list(catalog: &Catalog) -> Result<()> {
    for workout in catalog.sorted_workouts() {
        println!(
            "{:<20} {} ({} exercises, ~{})",
            workout.id,
            workout.title,
            workout.exercise_count(),
            format_duration(workout.estimated_duration_seconds)
        );
    }
    Ok(())
}

fn cmd_show(catalog: &Catalog, id: &str) -> Result<()> {
    let workout = find_workout(catalog, id)?;

    println!("{}", workout.title);
    println!(
        "  Estimated duration: {}",
        format_duration(workout.estimated_duration_seconds)
    );
    println!();
    for (index, entry) in workout.ordered_sequence.iter().enumerate() {
        println!("  {}. {}", index + 1, describe_entry(catalog, entry));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum RunMode {
    Interactive,
    AutoComplete,
    StopAfter(usize),
}

enum UserAction {
    Next,
    Pause,
    Resume,
    Stop,
}

fn cmd_run(
    catalog: &Catalog,
    id: &str,
    mode: RunMode,
    json: bool,
    config: &Config,
) -> Result<()> {
    let workout = find_workout(catalog, id)?;
    tracing::info!("Running workout '{}' in {:?} mode", workout.id, mode);
    let engine = ExecutionEngine::system();
    let mut session = engine.start(workout)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut advances = 0;

    let summary = loop {
        if engine.is_complete(&session) {
            break engine.complete(session);
        }

        if !json {
            display_session(
                &engine,
                &session,
                catalog,
                config.execution.upcoming_count,
            );
        }

        let action = match mode {
            RunMode::AutoComplete => UserAction::Next,
            RunMode::StopAfter(limit) if advances < limit => UserAction::Next,
            RunMode::StopAfter(_) => UserAction::Stop,
            RunMode::Interactive => prompt_user_action(&mut input, &session, json)?,
        };

        match action {
            UserAction::Next => match engine.advance(&session) {
                Ok(next) => {
                    session = next;
                    advances += 1;
                }
                // The previous session stays authoritative
                Err(e) => {
                    tracing::warn!("Advance rejected for session {}: {}", session.id, e);
                    eprintln!("{}", e);
                }
            },
            UserAction::Pause => {
                session = engine.pause(&session);
            }
            UserAction::Resume => {
                session = engine.resume(&session);
            }
            UserAction::Stop => break engine.stop(session),
        }
    };

    display_summary(&summary, json)
}

fn describe_entry(catalog: &Catalog, entry: &SequenceEntry) -> String {
    match entry {
        SequenceEntry::Exercise(item) => {
            let title = catalog
                .exercise_for(item)
                .map(|e| e.title.as_str())
                .unwrap_or_else(|| item.exercise_ref.as_str());
            format!("{} - {}", title, item.configuration.summary())
        }
        SequenceEntry::Break(item) => {
            format!("Break - {}", format_duration(item.duration_seconds))
        }
    }
}

fn display_session<C: Clock>(
    engine: &ExecutionEngine<C>,
    session: &Session,
    catalog: &Catalog,
    upcoming_count: usize,
) {
    let progress = engine.progress(session);

    println!();
    println!("── {} ──", progress.progress_text());
    if session.status == ExecutionStatus::Paused {
        println!("  [Paused] elapsed {}", progress.formatted_elapsed());
    }

    if let Some(entry) = session.current_entry() {
        println!("  {}", describe_entry(catalog, entry));
    }

    if let (Some(set), Some(SequenceEntry::Exercise(item))) =
        (session.current_set, session.current_entry())
    {
        if let Some(sets) = item.configuration.sets() {
            println!("  Set {} of {}", set, sets);
        }
    }

    // Countdowns are not shown while paused; they keep running on the clock
    if session.status == ExecutionStatus::Active {
        if let Some(remaining) = engine.remaining_set_break_seconds(session) {
            println!("  Rest between sets: {}s left", remaining);
        }
        if let Some(remaining) = engine.remaining_regular_break_seconds(session) {
            println!("  Break: {}s left", remaining);
        }
    }

    let upcoming = engine.upcoming_entries(session, upcoming_count);
    if !upcoming.is_empty() {
        println!("  Up next:");
        for entry in upcoming {
            println!("    → {}", describe_entry(catalog, entry));
        }
    }
}

fn display_summary(summary: &Summary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    let heading = match summary.final_status() {
        ExecutionStatus::Completed => "WORKOUT COMPLETE",
        _ => "WORKOUT STOPPED",
    };

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", heading);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", summary.workout_title);
    println!("  Duration: {}", summary.formatted_duration());
    println!(
        "  Exercises: {}/{}",
        summary.completed_exercises, summary.total_exercises
    );
    println!();
    Ok(())
}

fn prompt_user_action(
    input: &mut impl BufRead,
    session: &Session,
    quiet: bool,
) -> Result<UserAction> {
    if !quiet {
        println!("─────────────────────────────────────────");
        if session.status == ExecutionStatus::Paused {
            println!("'r' + Enter to resume");
        } else {
            println!("Press Enter when done");
            println!("  'p' + Enter to pause");
        }
        println!("  's' + Enter to stop");
        print!("> ");
        io::stdout().flush()?;
    }

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // End of input ends the session early
        return Ok(UserAction::Stop);
    }

    let action = match line.trim().to_lowercase().as_str() {
        "p" => UserAction::Pause,
        "r" => UserAction::Resume,
        "s" => UserAction::Stop,
        _ => UserAction::Next,
    };

    Ok(action)
}
