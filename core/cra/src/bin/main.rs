// Copyright CRA Contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use cra::args;
use cra::build_info;
use cra::runner;

fn main() {
    let args = args::Args::parse();

    // If the version flag is set, print the build info and exit
    if args.version() {
        println!("{}", build_info::BUILD_INFO);
        return;
    }

    if let Err(err) = runner::run(&args) {
        eprintln!("fatal: {err:#}");
        std::process::exit(1);
    }
}
