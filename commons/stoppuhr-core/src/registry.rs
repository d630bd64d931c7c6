// Copyright © 2024 Stephan Kunz

//! Module `registry` provides the [`TaskRegistry`] accumulating
//! [`TaskStats`] per task name, the [`Report`] snapshot produced from it
//! and the shared [`RegistryHandle`] used by timed scopes.

// region:		--- modules
use crate::error::{Error, Result};
use crate::stats::TaskStats;
use core::fmt::{self, Display};
use core::time::Duration;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
// endregion:	--- modules

// region:		--- types
/// The one registry used by all scopes that do not get an explicit one.
static GLOBAL: OnceLock<RegistryHandle> = OnceLock::new();
// endregion:	--- types

// region:		--- TaskRegistry
/// Accumulates statistics per task name.
///
/// Entries are kept in first-seen order, which is also the order of the
/// [`Report`]. Entries are never removed, only [`TaskRegistry::reset`]
/// forgets them all at once.
#[derive(Debug, Default)]
pub struct TaskRegistry {
	tasks: Vec<TaskStats>,
}

impl TaskRegistry {
	/// Create an empty registry.
	#[must_use]
	pub const fn new() -> Self {
		Self { tasks: Vec::new() }
	}

	/// Record one completed measurement under `task_name`.
	///
	/// The first measurement of a name inserts a new entry, every further
	/// one increments that entry. Names are used verbatim, measurements from
	/// unrelated call sites using the same name aggregate together.
	pub fn record(&mut self, task_name: &str, elapsed: Duration) {
		match self
			.tasks
			.iter_mut()
			.find(|task| task.name() == task_name)
		{
			Some(task) => task.increment(elapsed),
			None => self.tasks.push(TaskStats::new(task_name, elapsed)),
		}
	}

	/// The statistics recorded under `task_name`, if any.
	#[must_use]
	pub fn stats(&self, task_name: &str) -> Option<&TaskStats> {
		self.tasks.iter().find(|task| task.name() == task_name)
	}

	/// Number of distinct task names recorded.
	#[must_use]
	pub fn len(&self) -> usize {
		self.tasks.len()
	}

	/// `true` if nothing has been recorded yet.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tasks.is_empty()
	}

	/// Snapshot of all recorded statistics in first-seen order.
	#[must_use]
	pub fn report(&self) -> Report {
		Report {
			tasks: self.tasks.clone(),
		}
	}

	/// Forget all recorded statistics.
	pub fn reset(&mut self) {
		self.tasks.clear();
	}
}
// endregion:	--- TaskRegistry

// region:		--- Report
/// A point-in-time snapshot of a [`TaskRegistry`].
///
/// [`Display`] renders the summary table: task name, average runtime in
/// seconds and number of executions, one row per task in first-seen order.
/// An empty registry yields a report without data rows.
#[derive(Debug, Clone)]
pub struct Report {
	tasks: Vec<TaskStats>,
}

impl Report {
	/// The rows of the report in first-seen order.
	#[must_use]
	pub fn rows(&self) -> &[TaskStats] {
		&self.tasks
	}
}

impl Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		const RULE: &str =
			"------------------------------------------------------------";
		writeln!(f, "{RULE}")?;
		writeln!(f, "*** Average Runtime ***")?;
		writeln!(f, "Task Name \t Average Exec Time \t Number of Executions")?;
		for task in &self.tasks {
			writeln!(
				f,
				"{} \t {} \t {}",
				task.name(),
				task.average().as_secs_f64(),
				task.invocations()
			)?;
		}
		write!(f, "{RULE}")
	}
}
// endregion:	--- Report

// region:		--- RegistryHandle
/// Shared ownership of a [`TaskRegistry`].
///
/// The handle supplies the mutual exclusion around the increment-or-insert
/// step, so scopes on different threads may share one registry. Cloning the
/// handle clones the ownership, not the registry.
#[derive(Clone, Debug, Default)]
pub struct RegistryHandle {
	inner: Arc<Mutex<TaskRegistry>>,
}

impl RegistryHandle {
	/// Create a handle owning a fresh, empty registry.
	#[must_use]
	pub fn new() -> Self {
		Self {
			inner: Arc::new(Mutex::new(TaskRegistry::new())),
		}
	}

	/// Access the process-wide registry.
	///
	/// Created on first use, lives for the rest of the process.
	#[must_use]
	pub fn global() -> &'static Self {
		GLOBAL.get_or_init(Self::new)
	}

	/// Record one completed measurement under `task_name`.
	///
	/// # Errors
	/// [`Error::RegistryPoisoned`] if a thread panicked while holding the
	/// registry lock.
	pub fn record(&self, task_name: &str, elapsed: Duration) -> Result<()> {
		self.lock()?.record(task_name, elapsed);
		Ok(())
	}

	/// The statistics recorded under `task_name`, if any.
	///
	/// # Errors
	/// [`Error::RegistryPoisoned`] if a thread panicked while holding the
	/// registry lock.
	pub fn stats(&self, task_name: &str) -> Result<Option<TaskStats>> {
		Ok(self.lock()?.stats(task_name).cloned())
	}

	/// Snapshot of all recorded statistics in first-seen order.
	///
	/// # Errors
	/// [`Error::RegistryPoisoned`] if a thread panicked while holding the
	/// registry lock.
	pub fn report(&self) -> Result<Report> {
		Ok(self.lock()?.report())
	}

	/// Print the summary table to stdout.
	///
	/// # Errors
	/// [`Error::RegistryPoisoned`] if a thread panicked while holding the
	/// registry lock.
	pub fn print_report(&self) -> Result<()> {
		println!("{}", self.report()?);
		Ok(())
	}

	/// Forget all recorded statistics.
	///
	/// # Errors
	/// [`Error::RegistryPoisoned`] if a thread panicked while holding the
	/// registry lock.
	pub fn reset(&self) -> Result<()> {
		self.lock()?.reset();
		Ok(())
	}

	fn lock(&self) -> Result<MutexGuard<'_, TaskRegistry>> {
		self.inner.lock().map_err(|_| Error::RegistryPoisoned)
	}
}
// endregion:	--- RegistryHandle
