//! Command-line War simulator.
//!
//! Options: --suits, --ranks, --players, --seed, --json, -v

use clap::Parser;
use rust_war::cli::{run, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let output = run(&args);
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);

    ExitCode::from(output.status)
}
