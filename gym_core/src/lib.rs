#![forbid(unsafe_code)]

//! Core domain model and execution engine for guided workouts.
//!
//! This crate provides:
//! - Domain types (exercises, workout definitions, sessions, summaries)
//! - Execution engine driving a session through sets, rests and breaks
//! - Clock abstraction for computed countdowns
//! - Exercise catalog and configuration

pub mod types;
pub mod error;
pub mod clock;
pub mod workout;
pub mod session;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, ExecutionError, Result};
pub use types::*;
pub use clock::{Clock, ManualClock, SystemClock};
pub use workout::format_duration;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use engine::ExecutionEngine;
