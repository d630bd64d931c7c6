// Copyright © 2024 Stephan Kunz

//! Module `stats` provides [`TaskStats`], the accumulated wall-clock
//! statistics of one named task.

// region:		--- modules
use core::time::Duration;
// endregion:	--- modules

// region:		--- TaskStats
/// Accumulated wall-clock statistics of one named task.
///
/// Created from the first completed measurement of a task name and
/// incremented with every further one. Invocation count and total runtime
/// only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStats {
	/// Name of the task, unique key within a registry
	name: String,
	/// Number of completed measurements, always >= 1
	invocations: u64,
	/// Sum of all measured durations
	total: Duration,
}

impl TaskStats {
	/// Create statistics from a first completed measurement.
	#[must_use]
	pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
		Self {
			name: name.into(),
			invocations: 1,
			total: elapsed,
		}
	}

	/// Add a further completed measurement.
	pub fn increment(&mut self, elapsed: Duration) {
		self.invocations += 1;
		self.total += elapsed;
	}

	/// Name of the task.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Number of completed measurements recorded under this name.
	#[must_use]
	pub const fn invocations(&self) -> u64 {
		self.invocations
	}

	/// Sum of all measured durations.
	#[must_use]
	pub const fn total(&self) -> Duration {
		self.total
	}

	/// Average runtime of the task.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn average(&self) -> Duration {
		// invocations is always >= 1
		self.total.div_f64(self.invocations as f64)
	}
}
// endregion:	--- TaskStats

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<TaskStats>();
	}

	#[test]
	fn accumulates_monotonically() {
		let mut stats = TaskStats::new("work", Duration::from_millis(2));
		stats.increment(Duration::from_millis(4));
		stats.increment(Duration::from_millis(6));

		assert_eq!(stats.name(), "work");
		assert_eq!(stats.invocations(), 3);
		assert_eq!(stats.total(), Duration::from_millis(12));
	}

	#[test]
	fn average_is_total_over_invocations() {
		let mut stats = TaskStats::new("work", Duration::from_secs_f64(2.0));
		stats.increment(Duration::from_secs_f64(4.0));

		assert!((stats.average().as_secs_f64() - 3.0).abs() < 1e-9);
	}

	#[test]
	fn single_measurement_average() {
		let stats = TaskStats::new("once", Duration::from_millis(5));

		assert_eq!(stats.invocations(), 1);
		assert_eq!(stats.average(), stats.total());
	}
}
