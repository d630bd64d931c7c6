//! stoppuhr aggregation demo
//! Copyright © 2024 Stephan Kunz

// region:		--- modules
use clap::Parser;
use std::hint::black_box;
use stoppuhr::prelude::*;
// endregion:	--- modules

// region:		--- Clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// calls of the decorated task
	#[arg(short, long, value_parser, default_value_t = 30)]
	decorated: u32,
	/// runs of the explicit scope
	#[arg(short, long, value_parser, default_value_t = 10)]
	explicit: u32,
}
// endregion:	--- Clap

/// Example using the timed attribute
#[timed]
fn spin() {
	let mut acc = 0_u64;
	for value in 0..1_000_000_u64 {
		acc = acc.wrapping_add(value);
	}
	black_box(acc);
}

/// Example using an explicit scope
fn churn() {
	let scope = TimedScope::new("churn");
	let mut acc = 1_u64;
	for value in 1..2_000_000_u64 {
		acc = acc.wrapping_mul(value);
	}
	black_box(acc);
	println!("churned for {:?}", scope.time_since_start());
}

fn main() -> Result<()> {
	init_tracing();

	// parse arguments
	let args = Args::parse();

	for _ in 0..args.decorated {
		spin();
	}
	for _ in 0..args.explicit {
		churn();
	}

	RegistryHandle::global().print_report()
}
