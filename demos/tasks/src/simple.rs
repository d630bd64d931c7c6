//! stoppuhr stopwatch demo
//! Copyright © 2024 Stephan Kunz

// region:		--- modules
use clap::Parser;
use std::{thread, time::Duration};
use stoppuhr::prelude::*;
// endregion:	--- modules

// region:		--- Clap
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// how long to nap in milliseconds
	#[arg(short, long, value_parser, default_value_t = 250)]
	millis: u64,
}
// endregion:	--- Clap

fn main() {
	init_tracing();

	// parse arguments
	let args = Args::parse();

	let watch = Stopwatch::start("nap");
	thread::sleep(Duration::from_millis(args.millis));
	println!("napped for {:?}", watch.elapsed());
}
