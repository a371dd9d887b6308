// Membership lookup latency for Vec, HashSet, HashMap and a folded dictionary.
// * Generate 100K random floats in [0, 1), build all four views.
// * Pick the last generated value as target, so every lookup hits.
// * Time each lookup separately, 10K trials, one probe at a time.
// * Report mean latency per container in milliseconds.
//
// Diagnostics go to stderr, tune with RUST_LOG.

use std::{io::Write, process};

use log::error;

use lookup_bench::{Bench, Config, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    match run() {
        Ok(report) => println!("{}", report),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let bench = Bench::new(Config::new()?)?;
    let aggregate = bench.run();
    bench.self_check(&aggregate)?;
    Ok(aggregate.report())
}
