//! Dense matrix strategy with index translation
//!
//! Values live in a row-major `len × len` array, where `len` is the full
//! catalog size regardless of how many identifiers are populated. A lookup
//! translates each hash to a dense position through the catalog's shared
//! [`IndexTable`](pairbench_core::IndexTable) (two probes) and then reads one
//! cell. Unpopulated cells hold `None`, the not-found marker.
//!
//! The index table belongs to the catalog: it is built once, on first use,
//! by whichever container gets there first, and is never rebuilt or released
//! by a container.

use crate::container::PairContainer;
use pairbench_core::{stored_value, Catalog, PopulationRange, Result, TypeId};
use std::sync::Arc;
use tracing::{debug, info};

/// Dense matrix container
#[derive(Debug)]
pub struct MatrixContainer {
    catalog: Arc<Catalog>,
    cells: Option<Vec<Option<Box<str>>>>,
    stored: usize,
}

impl MatrixContainer {
    /// Create an empty container, building the catalog index table if needed
    pub fn new(catalog: Arc<Catalog>) -> Self {
        catalog.index_table();
        Self {
            catalog,
            cells: None,
            stored: 0,
        }
    }

    /// Side length of the matrix (the catalog size)
    #[inline]
    pub fn side(&self) -> usize {
        self.catalog.len()
    }

    /// Allocated cell count, `side * side` once populated
    pub fn capacity(&self) -> usize {
        self.cells.as_ref().map_or(0, |c| c.len())
    }

    #[inline]
    fn cell_index(&self, a: &TypeId, b: &TypeId) -> Option<usize> {
        let table = self.catalog.index_table();
        let row = table.get(a.hash())?;
        let col = table.get(b.hash())?;
        Some(row * self.side() + col)
    }
}

impl PairContainer for MatrixContainer {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn init(&mut self, requested: Option<usize>) -> Result<()> {
        self.cells = None;
        self.stored = 0;

        let ids = self.catalog.identifiers();
        let side = ids.len();
        let range = PopulationRange::new(requested, side);
        let mut cells: Vec<Option<Box<str>>> = vec![None; side * side];
        let mut stored = 0;

        for (i, j) in range.pairs() {
            let (a, b) = (&ids[i], &ids[j]);
            if let Some(idx) = self.cell_index(a, b) {
                if cells[idx]
                    .replace(stored_value(a, b).into_boxed_str())
                    .is_none()
                {
                    stored += 1;
                }
            }
        }

        info!(
            target: "pairbench::storage",
            strategy = self.name(),
            catalog_size = side,
            populated = range.count(),
            cells = cells.len(),
            entries = stored,
            "Populated container"
        );

        self.cells = Some(cells);
        self.stored = stored;
        Ok(())
    }

    #[inline]
    fn lookup(&self, a: &TypeId, b: &TypeId) -> Option<&str> {
        let cells = self.cells.as_ref()?;
        let idx = self.cell_index(a, b)?;
        cells.get(idx)?.as_deref()
    }

    fn len(&self) -> usize {
        self.stored
    }

    fn is_populated(&self) -> bool {
        self.cells.is_some()
    }

    fn dispose(&mut self) {
        if self.cells.take().is_some() {
            self.stored = 0;
            debug!(target: "pairbench::storage", strategy = self.name(), "Disposed container");
        }
    }
}
