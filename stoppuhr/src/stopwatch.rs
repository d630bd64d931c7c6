// Copyright © 2024 Stephan Kunz

//! Module `stopwatch` provides the plain scope timer: start and finish are
//! announced, nothing is recorded.

// region:		--- modules
use std::time::{Duration, Instant};
use tracing::info;
// endregion:	--- modules

// region:		--- Stopwatch
/// Plain scope timer.
///
/// Announces the task at construction and the elapsed time when dropped,
/// without updating any registry. For aggregated statistics use
/// [`TimedScope`](crate::TimedScope) instead.
#[derive(Debug)]
pub struct Stopwatch {
	task_name: String,
	start: Instant,
}

impl Stopwatch {
	/// Start a stopwatch for `task_name`.
	#[must_use]
	pub fn start(task_name: impl Into<String>) -> Self {
		let task_name = task_name.into();
		info!("starting '{}'", &task_name);
		Self {
			task_name,
			start: Instant::now(),
		}
	}

	/// Name of the task.
	#[must_use]
	pub fn task_name(&self) -> &str {
		&self.task_name
	}

	/// Elapsed time since start.
	#[must_use]
	pub fn elapsed(&self) -> Duration {
		self.start.elapsed()
	}
}

impl Drop for Stopwatch {
	fn drop(&mut self) {
		info!(
			"finished '{}' in {} s",
			&self.task_name,
			self.start.elapsed().as_secs_f64()
		);
	}
}
// endregion:	--- Stopwatch
