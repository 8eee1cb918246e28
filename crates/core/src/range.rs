//! Population range and stored values
//!
//! A container populated with `init(requested)` holds every ordered pair
//! `(catalog[i], catalog[j])` with `0 <= i, j < k`, where
//! `k = min(requested, catalog.len())`. Diagonal pairs are included and
//! `(a, b)` / `(b, a)` are distinct entries.

use crate::TypeId;

/// Square sub-range of the catalog cross-product inserted by `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationRange {
    count: usize,
}

impl PopulationRange {
    /// Clamp `requested` to the catalog size
    ///
    /// `None` means the whole catalog. Requests larger than the catalog are
    /// not an error.
    pub fn new(requested: Option<usize>, catalog_len: usize) -> Self {
        let count = requested.map_or(catalog_len, |r| r.min(catalog_len));
        Self { count }
    }

    /// Number of leading catalog entries in the range (`k`)
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of ordered pairs in the range (`k * k`)
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.count * self.count
    }

    /// Check whether catalog indices `(i, j)` fall inside the range
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.count && j < self.count
    }

    /// Iterate all `(i, j)` index pairs, row-major
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let k = self.count;
        (0..k).flat_map(move |i| (0..k).map(move |j| (i, j)))
    }
}

/// Value stored for the pair `(a, b)`: `"{a.name}.{b.name}"`
pub fn stored_value(a: &TypeId, b: &TypeId) -> String {
    format!("{}.{}", a.name(), b.name())
}
