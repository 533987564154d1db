//! Raw owning pointers vs `Rc` allocation benchmark.
//!
//! Prints mean and population variance of the populate, use and delete
//! phases for both strategies.
//!
//! Run with: cargo run --release

use std::process::ExitCode;

use ownership_bench::{run, BenchConfig};

fn main() -> ExitCode {
    let config = BenchConfig::default();

    eprintln!(
        "Objects: {}   Runs: {}   Platform: {}",
        config.object_count,
        config.run_count,
        std::env::consts::ARCH
    );

    match run(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
