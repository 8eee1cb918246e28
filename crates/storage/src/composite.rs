//! Single-map composite key strategy
//!
//! One flat `FxHashMap<u64, value>` keyed by a 64-bit key built from both
//! hashes (see [`crate::key`]). Lookup is a single probe.
//!
//! Distinct pairs whose identifiers share hashes encode to the same key; the
//! later insert silently overwrites the earlier one.

use crate::container::PairContainer;
use crate::key::KeyEncoding;
use pairbench_core::{stored_value, Catalog, PopulationRange, Result, TypeId};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Composite-key container
#[derive(Debug)]
pub struct CompositeKeyContainer {
    catalog: Arc<Catalog>,
    encoding: KeyEncoding,
    map: Option<FxHashMap<u64, Box<str>>>,
}

impl CompositeKeyContainer {
    /// Create an empty container using the shifted 64-bit encoding
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_encoding(catalog, KeyEncoding::Shifted)
    }

    /// Create an empty container with an explicit key encoding
    pub fn with_encoding(catalog: Arc<Catalog>, encoding: KeyEncoding) -> Self {
        Self {
            catalog,
            encoding,
            map: None,
        }
    }

    /// Key encoding in use
    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }
}

impl PairContainer for CompositeKeyContainer {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn init(&mut self, requested: Option<usize>) -> Result<()> {
        self.map = None;

        let ids = self.catalog.identifiers();
        let range = PopulationRange::new(requested, ids.len());
        let mut map = FxHashMap::with_capacity_and_hasher(range.pair_count(), Default::default());

        for (i, j) in range.pairs() {
            let (a, b) = (&ids[i], &ids[j]);
            let key = self.encoding.encode(a, b)?;
            map.insert(key, stored_value(a, b).into_boxed_str());
        }

        info!(
            target: "pairbench::storage",
            strategy = self.name(),
            catalog_size = ids.len(),
            populated = range.count(),
            entries = map.len(),
            "Populated container"
        );

        self.map = Some(map);
        Ok(())
    }

    #[inline]
    fn lookup(&self, a: &TypeId, b: &TypeId) -> Option<&str> {
        let map = self.map.as_ref()?;
        let key = self.encoding.encode(a, b).ok()?;
        map.get(&key).map(|v| &**v)
    }

    fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |m| m.len())
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

#[cfg(test)]
mod tests {
    use super::*;
    use pairbench_core::Error;

    fn catalog(hashes: &[i32]) -> Arc<Catalog> {
        Arc::new(
            Catalog::new(
                hashes
                    .iter()
                    .enumerate()
                    .map(|(i, &h)| TypeId::with_hash(format!("T{}", i), h)),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_populate_and_lookup() {
        let cat = catalog(&[10, 20, 30, 40, 50]);
        let mut c = CompositeKeyContainer::new(cat.clone());
        c.init(Some(3)).unwrap();

        assert_eq!(c.len(), 9);
        let ids = cat.identifiers();
        assert_eq!(c.lookup(&ids[1], &ids[2]), Some("T1.T2"));
        assert_eq!(c.lookup(&ids[2], &ids[1]), Some("T2.T1"));
        assert_eq!(c.lookup(&ids[0], &ids[0]), Some("T0.T0"));
        assert_eq!(c.lookup(&ids[3], &ids[0]), None);
        assert_eq!(c.lookup(&ids[0], &ids[4]), None);
    }

    #[test]
    fn test_hash_collision_overwrites() {
        // T0 and T1 share a hash, so (T0,T0) .. (T1,T1) all share one key.
        let cat = catalog(&[7, 7]);
        let mut c = CompositeKeyContainer::new(cat.clone());
        c.init(None).unwrap();

        assert_eq!(c.len(), 1);
        let ids = cat.identifiers();
        assert_eq!(c.lookup(&ids[0], &ids[0]), Some("T1.T1"));
    }

    #[test]
    fn test_decimal_concat_encoding() {
        let cat = catalog(&[1, 23, 456]);
        let mut c = CompositeKeyContainer::with_encoding(cat.clone(), KeyEncoding::DecimalConcat);
        c.init(None).unwrap();

        let ids = cat.identifiers();
        assert_eq!(c.len(), 9);
        assert_eq!(c.lookup(&ids[2], &ids[1]), Some("T2.T1"));
    }

    #[test]
    fn test_decimal_concat_collision_overwrites() {
        // "1" + "23" and "12" + "3" both read as 123.
        let cat = catalog(&[1, 23, 12, 3]);
        let mut c = CompositeKeyContainer::with_encoding(cat.clone(), KeyEncoding::DecimalConcat);
        c.init(None).unwrap();
        assert!(c.len() < 16);
    }

    #[test]
    fn test_decimal_concat_negative_hash_fails_init() {
        let cat = catalog(&[1, -2]);
        let mut c = CompositeKeyContainer::with_encoding(cat, KeyEncoding::DecimalConcat);
        let err = c.init(None).unwrap_err();
        assert!(matches!(err, Error::KeyEncoding { .. }));
        assert!(!c.is_populated());
        assert_eq!(c.len(), 0);
    }

    #[test]
    fn test_decimal_concat_unencodable_lookup_misses() {
        let cat = catalog(&[1, 2]);
        let mut c = CompositeKeyContainer::with_encoding(cat, KeyEncoding::DecimalConcat);
        c.init(None).unwrap();

        let outsider = TypeId::with_hash("Outsider", -5);
        let inside = TypeId::with_hash("T0", 1);
        assert_eq!(c.lookup(&outsider, &inside), None);
    }

    #[test]
    fn test_reinit_replaces_contents() {
        let cat = catalog(&[10, 20, 30]);
        let mut c = CompositeKeyContainer::new(cat.clone());
        c.init(None).unwrap();
        assert_eq!(c.len(), 9);

        c.init(Some(1)).unwrap();
        assert_eq!(c.len(), 1);
        let ids = cat.identifiers();
        assert_eq!(c.lookup(&ids[1], &ids[1]), None);
    }

    #[test]
    fn test_dispose_idempotent() {
        let cat = catalog(&[10, 20]);
        let mut c = CompositeKeyContainer::new(cat.clone());
        c.dispose();
        c.init(None).unwrap();
        c.dispose();
        c.dispose();

        assert!(!c.is_populated());
        let ids = cat.identifiers();
        assert_eq!(c.lookup(&ids[0], &ids[0]), None);
    }
}
