// Copyright © 2024 Stephan Kunz

//! Core of `stoppuhr`: per-task statistics and their registry.

// region:    --- modules
/// Error handling
pub mod error;
/// Task registry
pub mod registry;
/// Task statistics
pub mod stats;
/// Utilities
pub mod utils;

// flatten
pub use error::{Error, Result};
pub use registry::{RegistryHandle, Report, TaskRegistry};
pub use stats::TaskStats;
// endregion: --- modules
