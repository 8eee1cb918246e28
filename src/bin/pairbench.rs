//! pairbench runner
//!
//! Usage:
//!   pairbench [CONFIG]            # default: ./pairbench.toml, created if missing
//!   PAIRBENCH_JSON=1 pairbench    # print results as JSON
//!   RUST_LOG=debug pairbench      # verbose logging

use anyhow::Context;
use pairbench::{format_report, run_suite, to_json, BenchConfig, Catalog, CONFIG_FILE_NAME};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    BenchConfig::write_default_if_missing(&path)
        .with_context(|| format!("writing default config to {}", path.display()))?;
    let config = BenchConfig::from_file(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;

    info!(target: "pairbench", config = %path.display(), "Loaded configuration");

    let catalog = Arc::new(Catalog::synthetic(config.catalog_size));
    let results = run_suite(&config, catalog).context("running benchmark suite")?;

    if std::env::var_os("PAIRBENCH_JSON").is_some() {
        println!("{}", to_json(&results)?);
    } else {
        print!("{}", format_report(&results));
    }
    Ok(())
}
