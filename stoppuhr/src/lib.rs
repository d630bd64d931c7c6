// Copyright © 2024 Stephan Kunz
#![crate_type = "lib"]
#![crate_name = "stoppuhr"]
#![warn(missing_docs)]

#[doc = include_str!("../README.md")]
#[cfg(feature = "nightly")]
#[cfg(doctest)]
doc_comment::doctest!("../README.md");

// region:    --- modules
/// Public interface of stoppuhr.
/// Typically it is sufficient to include the prelude with
/// `use stoppuhr::prelude::*;`
pub mod prelude;
/// The scope guard measuring a unit of work
pub mod scope;
/// The plain scope timer without statistics
pub mod stopwatch;
/// Function wrappers around the scope guard
pub mod wrap;

// flatten
pub use scope::TimedScope;
pub use stoppuhr_macros::timed;
pub use stopwatch::Stopwatch;
pub use wrap::{timed, timed_with_registry};
// endregion: --- modules
