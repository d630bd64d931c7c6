// Copyright © 2024 Stephan Kunz

//! Module `scope` provides the [`TimedScope`] guard measuring the
//! wall-clock time of a unit of work.

// region:		--- modules
use std::time::{Duration, Instant};
use stoppuhr_core::RegistryHandle;
use tracing::{error, info};
// endregion:	--- modules

// region:		--- TimedScope
/// Guard measuring the wall-clock time between its construction and its
/// drop, reporting the result to a [`TaskRegistry`](stoppuhr_core::TaskRegistry).
///
/// Construction announces the task and captures the start instant of the
/// monotonic clock. Dropping the guard computes the elapsed time, announces
/// the finish and records the measurement under the task name. Since drop
/// runs on every exit path, a unit of work that returns early, errors or
/// panics is measured and counted like a successful one; the error or panic
/// itself passes on to the caller unchanged.
///
/// Zero-length scopes are valid and counted. Scopes with the same task name
/// aggregate into one statistic, no matter where they were opened.
#[derive(Debug)]
pub struct TimedScope {
	task_name: String,
	registry: RegistryHandle,
	start: Instant,
}

impl TimedScope {
	/// Open a scope reporting to the process-wide registry.
	#[must_use]
	pub fn new(task_name: impl Into<String>) -> Self {
		Self::with_registry(task_name, RegistryHandle::global().clone())
	}

	/// Open a scope reporting to the given registry.
	#[must_use]
	pub fn with_registry(task_name: impl Into<String>, registry: RegistryHandle) -> Self {
		let task_name = task_name.into();
		info!("starting '{}'", &task_name);
		Self {
			task_name,
			registry,
			// captured last, the announcement is not part of the measurement
			start: Instant::now(),
		}
	}

	/// Name of the task this scope measures.
	#[must_use]
	pub fn task_name(&self) -> &str {
		&self.task_name
	}

	/// Elapsed time since the scope was opened, without closing it.
	#[must_use]
	pub fn time_since_start(&self) -> Duration {
		self.start.elapsed()
	}
}

impl Drop for TimedScope {
	fn drop(&mut self) {
		let elapsed = self.start.elapsed();
		info!(
			"finished '{}' in {} s",
			&self.task_name,
			elapsed.as_secs_f64()
		);
		if let Err(error) = self.registry.record(&self.task_name, elapsed) {
			// drop must not panic, the measurement is lost
			error!("recording '{}' failed with {error}", &self.task_name);
		}
	}
}
// endregion:	--- TimedScope

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<TimedScope>();
	}

	#[test]
	fn scope_records_on_drop() {
		let registry = RegistryHandle::new();
		{
			let scope = TimedScope::with_registry("block", registry.clone());
			assert_eq!(scope.task_name(), "block");
			assert!(registry.stats("block").expect("snh").is_none());
		}
		let stats = registry.stats("block").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
	}

	#[test]
	fn zero_length_scope_counts() {
		let registry = RegistryHandle::new();
		drop(TimedScope::with_registry("noop", registry.clone()));

		let stats = registry.stats("noop").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
		assert!(stats.total() >= Duration::ZERO);
	}

	#[test]
	fn early_return_is_measured() {
		fn finishes_early(registry: &RegistryHandle, bail: bool) -> Option<u32> {
			let _scope = TimedScope::with_registry("early", registry.clone());
			if bail {
				return None;
			}
			Some(1)
		}

		let registry = RegistryHandle::new();
		assert!(finishes_early(&registry, true).is_none());

		let stats = registry.stats("early").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
	}

	#[test]
	fn time_since_start_grows() {
		let registry = RegistryHandle::new();
		let scope = TimedScope::with_registry("growing", registry.clone());
		let first = scope.time_since_start();
		std::thread::sleep(Duration::from_millis(1));
		assert!(scope.time_since_start() > first);
	}

	#[test]
	fn same_name_aggregates() {
		let registry = RegistryHandle::new();
		for _ in 0..3 {
			let _scope = TimedScope::with_registry("repeated", registry.clone());
		}
		let stats = registry.stats("repeated").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 3);
	}
}
