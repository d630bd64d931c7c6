// Copyright © 2024 Stephan Kunz

//! Module `wrap` provides function wrappers running a unit of work inside
//! a [`TimedScope`]. The `#[timed]` attribute expands to the same pattern.

// region:		--- modules
use crate::scope::TimedScope;
use stoppuhr_core::RegistryHandle;
// endregion:	--- modules

// region:		--- functions
/// Run `work` inside a scope reporting to the process-wide registry.
///
/// The return value of `work` passes through unchanged. An `Err` returned
/// by `work` is recorded and counted like a success before it reaches the
/// caller, as is a panic unwinding out of `work`.
pub fn timed<R>(task_name: &str, work: impl FnOnce() -> R) -> R {
	let _scope = TimedScope::new(task_name);
	work()
}

/// Run `work` inside a scope reporting to the given registry.
pub fn timed_with_registry<R>(
	task_name: &str,
	registry: RegistryHandle,
	work: impl FnOnce() -> R,
) -> R {
	let _scope = TimedScope::with_registry(task_name, registry);
	work()
}
// endregion:	--- functions

#[cfg(test)]
mod tests {
	use super::*;
	use core::time::Duration;

	#[test]
	fn return_value_passes_through() {
		let registry = RegistryHandle::new();
		let value = timed_with_registry("passes", registry.clone(), || 42);
		assert_eq!(value, 42);

		let stats = registry.stats("passes").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
	}

	#[test]
	fn error_propagates_after_recording() {
		let registry = RegistryHandle::new();
		let outcome: core::result::Result<(), &str> =
			timed_with_registry("failing", registry.clone(), || Err("boom"));
		assert_eq!(outcome, Err("boom"));

		// the failed attempt still counts
		let stats = registry.stats("failing").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
	}

	#[test]
	fn panic_propagates_after_recording() {
		let registry = RegistryHandle::new();
		let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			timed_with_registry("exploding", registry.clone(), || panic!("boom"));
		}));
		assert!(panicked.is_err());

		// the unwound attempt still counts
		let stats = registry.stats("exploding").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 1);
	}

	#[test]
	fn wrapper_and_block_mutate_alike() {
		let registry = RegistryHandle::new();

		timed_with_registry("alike", registry.clone(), || {
			std::thread::sleep(Duration::from_millis(1));
		});
		{
			let _scope = TimedScope::with_registry("alike", registry.clone());
			std::thread::sleep(Duration::from_millis(1));
		}

		let stats = registry.stats("alike").expect("snh").expect("snh");
		assert_eq!(stats.invocations(), 2);
		assert!(stats.total() >= Duration::from_millis(2));
	}
}
