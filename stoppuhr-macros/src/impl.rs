// Copyright © 2024 Stephan Kunz

//! Macro implementation
//!

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parser, punctuated::Punctuated, ItemFn, Meta, Token};

type Arguments = Punctuated<Meta, Token![,]>;

const UNSUPPORTED: &str = "not supported by macro";

#[derive(Default)]
struct Config {
	name: Option<String>,
}

fn parse_config(args: Arguments) -> Result<Config, syn::Error> {
	let mut config = Config::default();

	for arg in args {
		match arg {
			Meta::List(list) => {
				return Err(syn::Error::new_spanned(&list, UNSUPPORTED));
			}
			Meta::NameValue(named_value) => {
				// get ident
				let ident = named_value
					.path
					.get_ident()
					.ok_or_else(|| {
						syn::Error::new_spanned(&named_value, "must have a specified ident")
					})?
					.to_string()
					.to_lowercase();

				// check
				let lit = match &named_value.value {
					syn::Expr::Lit(syn::ExprLit { lit, .. }) => lit,
					expr => return Err(syn::Error::new_spanned(expr, "must be a literal")),
				};
				match ident.as_str() {
					"name" => {
						config.name = match lit {
							syn::Lit::Str(str_lit) => Some(str_lit.value()),
							_ => {
								return Err(syn::Error::new(
									syn::spanned::Spanned::span(lit),
									format!("value `{ident}` is no string literal"),
								))
							}
						};
					}
					_ => return Err(syn::Error::new_spanned(&named_value, UNSUPPORTED)),
				}
			}
			Meta::Path(path) => {
				return Err(syn::Error::new_spanned(&path, UNSUPPORTED));
			}
		}
	}

	Ok(config)
}

pub fn timed(args: TokenStream, timed_fn: TokenStream) -> TokenStream {
	// save original for creation of result with error
	let mut result_with_error = timed_fn.clone();

	// parse the annotated function
	let timed_fn: ItemFn = match syn::parse2(timed_fn) {
		Ok(item) => item,
		Err(error) => {
			result_with_error.extend(error.into_compile_error());
			return result_with_error;
		}
	};

	// parse args
	let config = Arguments::parse_terminated
		.parse2(args)
		.and_then(parse_config);

	match config {
		Ok(config) => {
			// registry key defaults to the function name
			let task_name = config
				.name
				.unwrap_or_else(|| timed_fn.sig.ident.to_string());

			// variables for quote macro
			let attrs = &timed_fn.attrs;
			let vis = &timed_fn.vis;
			let signature = &timed_fn.sig;
			let body = &timed_fn.block;

			// the guard is dropped on every exit path of the body
			quote! {
				#(#attrs)*
				#vis #signature {
					let __scope = ::stoppuhr::TimedScope::new(#task_name);
					#body
				}
			}
		}
		Err(err) => {
			result_with_error.extend(err.into_compile_error());
			result_with_error
		}
	}
}
