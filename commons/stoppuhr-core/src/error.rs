// Copyright © 2024 Stephan Kunz

//! `stoppuhr-core` errors

// region:		--- types
/// Type alias for `core::result::Result` to ease up implementation
pub type Result<T> = core::result::Result<T, Error>;
// endregion:	--- types

// region:		--- Error
/// `stoppuhr-core` error type.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// The registry Mutex is poisoned.
	/// Cannot happen as long as the registry is used from a single thread.
	#[error("the task registry lock is poisoned")]
	RegistryPoisoned,
}
// endregion:	--- Error

#[cfg(test)]
mod tests {
	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Error>();
	}
}
