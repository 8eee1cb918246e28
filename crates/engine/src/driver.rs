//! Randomized lookup driver
//!
//! Times a batch of lookups against a populated [`PairContainer`]:
//! 1. Pre-generate `n` uniformly random pairs, with replacement, from the
//!    **full** catalog. When the container was populated over a prefix of
//!    the catalog this yields a mix of hits and misses.
//! 2. Start a monotonic timer.
//! 3. Resolve each pair sequentially on the calling thread, counting misses.
//! 4. Stop the timer.
//!
//! Key generation happens before the timer starts, so its cost never shows
//! up in the measurement.

use pairbench_core::{Catalog, Error, Result, TypeId};
use pairbench_storage::PairContainer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Serializer};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::info;

/// Lookups per run when the caller has no preference
pub const DEFAULT_NUM_LOOKUPS: usize = 1_000_000;

/// Outcome of one timed batch of lookups
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// Strategy name
    pub strategy: &'static str,
    /// Lookups performed
    pub lookups: usize,
    /// Lookups that returned no value
    pub misses: usize,
    /// Wall time of the lookup loop only
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl LookupReport {
    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Lookups that returned a value
    pub fn hits(&self) -> usize {
        self.lookups - self.misses
    }

    /// Mean cost of one lookup in nanoseconds, 0 for an empty batch
    pub fn ns_per_lookup(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.lookups as f64
    }
}

pub(crate) fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}

/// Draw `n` random pairs, uniformly and with replacement, from the whole catalog
///
/// # Errors
///
/// Returns [`Error::EmptyCatalog`] when `n > 0` and the catalog is empty.
pub fn generate_lookup_keys<'a, R>(
    catalog: &'a Catalog,
    n: usize,
    rng: &mut R,
) -> Result<Vec<(&'a TypeId, &'a TypeId)>>
where
    R: Rng + ?Sized,
{
    if n == 0 {
        return Ok(Vec::new());
    }
    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let ids = catalog.identifiers();
    let max = ids.len();
    Ok((0..n)
        .map(|_| (&ids[rng.gen_range(0..max)], &ids[rng.gen_range(0..max)]))
        .collect())
}

/// Run `num_lookups` random lookups against `container` and time them
///
/// # Errors
///
/// Returns [`Error::EmptyCatalog`] when lookups are requested over an empty
/// catalog. Misses are counted, never reported as errors.
pub fn execute_random_lookup<C, R>(
    container: &C,
    num_lookups: usize,
    rng: &mut R,
) -> Result<LookupReport>
where
    C: PairContainer + ?Sized,
    R: Rng + ?Sized,
{
    let keys = generate_lookup_keys(container.catalog(), num_lookups, rng)?;

    let mut misses = 0usize;
    let start = Instant::now();
    for &(a, b) in &keys {
        if black_box(container.lookup(a, b)).is_none() {
            misses += 1;
        }
    }
    let elapsed = start.elapsed();

    let report = LookupReport {
        strategy: container.name(),
        lookups: num_lookups,
        misses,
        elapsed,
    };

    info!(
        target: "pairbench::driver",
        strategy = report.strategy,
        lookups = report.lookups,
        misses = report.misses,
        elapsed_ms = report.elapsed_ms() as u64,
        "Random lookup complete"
    );

    Ok(report)
}

/// [`execute_random_lookup`] with a reproducible key sequence
pub fn execute_random_lookup_seeded<C>(
    container: &C,
    num_lookups: usize,
    seed: u64,
) -> Result<LookupReport>
where
    C: PairContainer + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(seed);
    execute_random_lookup(container, num_lookups, &mut rng)
}
