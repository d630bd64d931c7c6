// Copyright © 2024 Stephan Kunz

//! Helper functions
//!

// region:    --- Tracing
/// Initialize tracing
///
/// Installs a formatting subscriber showing level and target of each event.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
	let subscriber = tracing_subscriber::fmt()
		//.with_env_filter(env_filter)
		.with_level(true)
		.with_target(true);

	let subscriber = subscriber.finish();
	let _ = tracing::subscriber::set_global_default(subscriber);
}
// endregion: --- Tracing
