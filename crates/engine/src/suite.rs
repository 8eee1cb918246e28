//! Strategy comparison suite
//!
//! Runs every configured strategy at every configured population level over
//! one shared catalog. Each run owns a fresh container: populate, warm up,
//! time the random lookups, dispose. The container is dropped on every exit
//! path, so a failing run never leaks its structure into the next one.

use crate::config::{BenchConfig, Population};
use crate::driver::{execute_random_lookup, serialize_millis, LookupReport};
use pairbench_core::{Catalog, PopulationRange, Result};
use pairbench_storage::StrategyKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of one strategy at one population level
#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    /// Strategy under test
    pub strategy: StrategyKind,
    /// Requested population level
    pub population: Population,
    /// Leading catalog entries actually populated (after clamping)
    pub populated: usize,
    /// Values stored after population
    pub entries: usize,
    /// Time spent in `init`
    #[serde(rename = "populate_ms", serialize_with = "serialize_millis")]
    pub populate_time: Duration,
    /// Timed lookup outcome
    pub lookup: LookupReport,
}

/// Run the full strategy × population matrix described by `config`
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a container fails to
/// populate.
pub fn run_suite(config: &BenchConfig, catalog: Arc<Catalog>) -> Result<Vec<SuiteResult>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        target: "pairbench::suite",
        catalog_size = catalog.len(),
        strategies = config.strategies.len(),
        populations = config.populations.len(),
        num_lookups = config.num_lookups,
        "Starting suite"
    );

    let mut results = Vec::with_capacity(config.strategies.len() * config.populations.len());
    for &strategy in &config.strategies {
        for &population in &config.populations {
            let mut container = strategy.build(catalog.clone());

            let start = Instant::now();
            container.init(population.requested())?;
            let populate_time = start.elapsed();

            if config.warmup_lookups > 0 {
                execute_random_lookup(&*container, config.warmup_lookups, &mut rng)?;
            }
            let lookup = execute_random_lookup(&*container, config.num_lookups, &mut rng)?;

            results.push(SuiteResult {
                strategy,
                population,
                populated: PopulationRange::new(population.requested(), catalog.len()).count(),
                entries: container.len(),
                populate_time,
                lookup,
            });

            container.dispose();
        }
    }

    Ok(results)
}
