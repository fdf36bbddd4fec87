//! Logger setup shared by the binaries. Log lines go to stderr so that they never mix with a
//! tour written to stdout. The environment variable `TSP_LOG` (same syntax as `RUST_LOG`)
//! overrides the level chosen on the command line.

use std::{io::Write, time::Instant};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

pub const LOG_ENV_VAR: &str = "TSP_LOG";

pub fn build_tsp_logger_for_level(level: LevelFilter) {
    let start = Instant::now();

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:>8.3}s {:<5} {}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .parse_env(Env::new().filter(LOG_ENV_VAR));

    // a logger may already be installed (e.g., by a test harness)
    let _ = builder.try_init();
}

/// Raises `base` by one level per occurrence of the verbosity flag
pub fn build_tsp_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = LevelFilter::iter()
        .skip_while(|&l| l != base)
        .nth(verbosity)
        .unwrap_or(LevelFilter::Trace);

    build_tsp_logger_for_level(level);
}
