//! Error types for the gym_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the execution engine.
///
/// All of them are caller-facing logic errors. A failed operation never
/// alters the session it was given.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// `start` was called on a workout without any exercise entries
    #[error("Workout cannot be started (no exercises)")]
    WorkoutNotValid,

    /// `advance` was called on a session that is not active
    #[error("Session is not active")]
    SessionNotActive,

    /// `advance` would move past the end of the sequence
    #[error("Cannot advance to next item")]
    CannotAdvance,
}

/// Core error type for gym_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Execution engine error
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
