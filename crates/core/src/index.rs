//! Dense index table: hash → catalog position
//!
//! Maps each catalog identifier's hash to a dense position in
//! `[0, catalog.len())`, assigned by enumerating the catalog in order.
//! Used only by the matrix strategy to turn a pair of hashes into array
//! coordinates.
//!
//! The table is built once per catalog (see [`Catalog::index_table`]) and is
//! read-only afterwards.
//!
//! [`Catalog::index_table`]: crate::Catalog::index_table

use crate::TypeId;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Read-only mapping from identifier hash to dense position
#[derive(Debug, Default)]
pub struct IndexTable {
    positions: FxHashMap<i32, usize>,
}

impl IndexTable {
    /// Build the table from identifiers in catalog order
    ///
    /// The identifier at catalog index `i` is assigned position `i`. When two
    /// identifiers share a hash, the first one keeps its position and the
    /// later one gets none.
    pub fn build(ids: &[TypeId]) -> Self {
        let mut positions =
            FxHashMap::with_capacity_and_hasher(ids.len(), Default::default());

        for (position, id) in ids.iter().enumerate() {
            if let Some(&existing) = positions.get(&id.hash()) {
                warn!(
                    target: "pairbench::index",
                    name = id.name(),
                    hash = id.hash(),
                    existing_position = existing,
                    "Hash collision in catalog, identifier has no matrix position"
                );
                continue;
            }
            positions.insert(id.hash(), position);
        }

        debug!(
            target: "pairbench::index",
            entries = positions.len(),
            catalog_size = ids.len(),
            "Built index table"
        );

        Self { positions }
    }

    /// Position assigned to `hash`, if any
    #[inline]
    pub fn get(&self, hash: i32) -> Option<usize> {
        self.positions.get(&hash).copied()
    }

    /// Number of hashes with a position
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate `(hash, position)` entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.positions.iter().map(|(&h, &p)| (h, p))
    }
}
