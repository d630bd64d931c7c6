// Copyright © 2024 Stephan Kunz

// region:    --- modules
pub use crate::scope::TimedScope;
pub use crate::stopwatch::Stopwatch;
pub use crate::wrap::{timed, timed_with_registry};
pub use stoppuhr_core::error::{Error, Result};
pub use stoppuhr_core::registry::{RegistryHandle, Report, TaskRegistry};
pub use stoppuhr_core::stats::TaskStats;
pub use stoppuhr_core::utils::init_tracing;
pub use stoppuhr_macros::timed;
// endregion: --- modules
