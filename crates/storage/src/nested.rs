//! Nested map strategy
//!
//! Outer `FxHashMap` keyed by the first identifier's hash, holding an inner
//! map keyed by the second identifier's hash. A lookup costs two probes, but
//! no combined key has to be computed. A missing outer key short-circuits
//! without touching any inner map.

use crate::container::PairContainer;
use crate::key::nested_keys;
use pairbench_core::{stored_value, Catalog, PopulationRange, Result, TypeId};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};

type InnerMap = FxHashMap<i32, Box<str>>;

/// Map-of-maps container
#[derive(Debug)]
pub struct NestedMapContainer {
    catalog: Arc<Catalog>,
    map: Option<FxHashMap<i32, InnerMap>>,
}

impl NestedMapContainer {
    /// Create an empty container
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, map: None }
    }

    /// Number of outer entries (distinct first hashes)
    pub fn outer_len(&self) -> usize {
        self.map.as_ref().map_or(0, |m| m.len())
    }
}

impl PairContainer for NestedMapContainer {
    fn name(&self) -> &'static str {
        "nested"
    }

    fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn init(&mut self, requested: Option<usize>) -> Result<()> {
        self.map = None;

        let ids = self.catalog.identifiers();
        let range = PopulationRange::new(requested, ids.len());
        let k = range.count();
        let mut outer: FxHashMap<i32, InnerMap> =
            FxHashMap::with_capacity_and_hasher(k, Default::default());

        for a in &ids[..k] {
            // Reuse the inner map when two identifiers share a hash.
            let inner = outer
                .entry(a.hash())
                .or_insert_with(|| FxHashMap::with_capacity_and_hasher(k, Default::default()));
            for b in &ids[..k] {
                let (_, inner_key) = nested_keys(a, b);
                inner.insert(inner_key, stored_value(a, b).into_boxed_str());
            }
        }

        info!(
            target: "pairbench::storage",
            strategy = self.name(),
            catalog_size = ids.len(),
            populated = k,
            outer_entries = outer.len(),
            "Populated container"
        );

        self.map = Some(outer);
        Ok(())
    }

    #[inline]
    fn lookup(&self, a: &TypeId, b: &TypeId) -> Option<&str> {
        let (outer_key, inner_key) = nested_keys(a, b);
        self.map
            .as_ref()?
            .get(&outer_key)?
            .get(&inner_key)
            .map(|v| &**v)
    }

    fn len(&self) -> usize {
        self.map
            .as_ref()
            .map_or(0, |m| m.values().map(|inner| inner.len()).sum())
    }

    fn is_populated(&self) -> bool {
        self.map.is_some()
    }

    fn dispose(&mut self) {
        if self.map.take().is_some() {
            debug!(target: "pairbench::storage", strategy = self.name(), "Disposed container");
        }
    }
}
