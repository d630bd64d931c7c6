// Copyright © 2024 Stephan Kunz

//! `#[timed(...)]` macro for `stoppuhr`
//!

extern crate proc_macro;

mod r#impl;

use proc_macro::TokenStream;

/// Marks a function to be measured by a `TimedScope` on every call.
///
/// Each call of the function runs its body inside a scope reporting to the
/// process-wide registry. The return value and any error of the body pass
/// through unchanged, early returns and `?` included.
///
/// Note: The macro can only be used on free functions.
///
/// # Usage
/// ```no_test
/// #[stoppuhr::timed]
/// fn work() {
///     // your code
///     ...
/// }
/// ```
///
/// ## Explicit task name
/// The registry key defaults to the function name. To aggregate under a
/// different name, the macro can be configured using
///
/// ```no_test
/// #[stoppuhr::timed(name = "other name")]
/// ```
///
#[proc_macro_attribute]
pub fn timed(metadata: TokenStream, input: TokenStream) -> TokenStream {
	// call implementation with conversion to and from proc-macro2 library
	r#impl::timed(metadata.into(), input.into()).into()
}
