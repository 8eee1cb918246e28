//! Benchmark engine for pairbench
//!
//! Drives populated containers through timed random lookups and compares
//! strategies:
//! - driver: random key pre-generation and the timed single-threaded lookup loop
//! - suite: strategy × population runs over one shared catalog
//! - config: `pairbench.toml` loading and validation
//! - report: text and JSON rendering of suite results

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod driver;
pub mod report;
pub mod suite;

pub use config::{BenchConfig, Population, CONFIG_FILE_NAME};
pub use driver::{
    execute_random_lookup, execute_random_lookup_seeded, generate_lookup_keys, LookupReport,
    DEFAULT_NUM_LOOKUPS,
};
pub use report::{format_report, to_json};
pub use suite::{run_suite, SuiteResult};
