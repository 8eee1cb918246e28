//! Container contract shared by every storage strategy
//!
//! Lifecycle: constructed → [`init`](PairContainer::init) → any number of
//! lookups → [`dispose`](PairContainer::dispose) or drop. A container is
//! read-only between `init` and `dispose`, so every pair in the populated
//! range resolves for as long as the container lives.

use crate::{CompositeKeyContainer, MatrixContainer, NestedMapContainer};
use pairbench_core::{Catalog, Error, Result, TypeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Lookup structure mapping an ordered pair of identifiers to a stored value
pub trait PairContainer: Send {
    /// Human-readable strategy name for reports
    fn name(&self) -> &'static str;

    /// Catalog this container was built over
    fn catalog(&self) -> &Arc<Catalog>;

    /// Populate over the first `min(requested, catalog.len())` identifiers
    ///
    /// `None` populates the whole catalog. Calling `init` again replaces the
    /// previous contents. If population fails the container is left empty.
    fn init(&mut self, requested: Option<usize>) -> Result<()>;

    /// Stored value for `(a, b)`, or `None` if the pair was not populated
    ///
    /// Never fails; an uninitialized or disposed container misses every pair.
    fn lookup(&self, a: &TypeId, b: &TypeId) -> Option<&str>;

    /// Number of stored values
    fn len(&self) -> usize;

    /// Check if no values are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `init` has run since construction or the last `dispose`
    fn is_populated(&self) -> bool;

    /// Release the populated structure
    ///
    /// Idempotent, and safe before `init`.
    fn dispose(&mut self);
}

/// Selectable storage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Single map keyed by a 64-bit composite of both hashes
    Composite,
    /// Map of maps keyed by each hash in turn
    Nested,
    /// Dense matrix addressed through the catalog index table
    Matrix,
}

impl StrategyKind {
    /// Every strategy, in report order
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Composite,
        StrategyKind::Nested,
        StrategyKind::Matrix,
    ];

    /// Name used in configuration and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Composite => "composite",
            StrategyKind::Nested => "nested",
            StrategyKind::Matrix => "matrix",
        }
    }

    /// Construct an empty container of this kind over `catalog`
    pub fn build(&self, catalog: Arc<Catalog>) -> Box<dyn PairContainer> {
        match self {
            StrategyKind::Composite => Box::new(CompositeKeyContainer::new(catalog)),
            StrategyKind::Nested => Box::new(NestedMapContainer::new(catalog)),
            StrategyKind::Matrix => Box::new(MatrixContainer::new(catalog)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "composite" => Ok(StrategyKind::Composite),
            "nested" => Ok(StrategyKind::Nested),
            "matrix" => Ok(StrategyKind::Matrix),
            other => Err(Error::InvalidConfig(format!(
                "Unknown strategy '{}'. Expected \"composite\", \"nested\" or \"matrix\".",
                other
            ))),
        }
    }
}
