//! pairbench - compare in-memory containers keyed by pairs of type identifiers
//!
//! Given a catalog of type identifiers, each strategy stores a value for
//! every ordered pair in a square prefix of the catalog, then resolves a
//! batch of random pairs drawn from the whole catalog. The driver reports
//! elapsed time and miss count per strategy.
//!
//! # Quick Start
//!
//! ```
//! use pairbench::{execute_random_lookup_seeded, Catalog, StrategyKind};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::synthetic(64));
//! let mut container = StrategyKind::Matrix.build(catalog);
//! container.init(Some(32))?;
//!
//! let report = execute_random_lookup_seeded(&*container, 10_000, 42)?;
//! assert!(report.misses > 0);
//! container.dispose();
//! # Ok::<(), pairbench::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `pairbench-core`: identifiers, catalog, population range, errors
//! - `pairbench-storage`: the three container strategies and key encoders
//! - `pairbench-engine`: timed driver, suite runner, configuration, reports

pub use pairbench_core::{
    stored_value, Catalog, Error, IndexTable, PopulationRange, Result, TypeId,
};
pub use pairbench_engine::*;
pub use pairbench_storage::{
    composite_key, concat_key, nested_keys, CompositeKeyContainer, KeyEncoding, MatrixContainer,
    NestedMapContainer, PairContainer, StrategyKind,
};
