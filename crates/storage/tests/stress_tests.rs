//! Stress tests for the storage strategies
//!
//! Large catalogs exercise allocation and hashing at realistic scale.
//!
//! Note: These tests are marked with #[ignore] as they take longer to run.
//! Run with: cargo test --release -- --ignored

use std::sync::Arc;
use std::time::Instant;

use pairbench_core::Catalog;
use pairbench_storage::StrategyKind;
use rand::prelude::*;

/// Populate a 2048-type catalog (4M pairs) with every strategy
#[test]
#[ignore]
fn test_full_population_large_catalog() {
    let catalog = Arc::new(Catalog::synthetic(2048));
    let ids = catalog.identifiers();
    let mut rng = StdRng::seed_from_u64(7);

    for kind in StrategyKind::ALL {
        let start = Instant::now();
        let mut c = kind.build(catalog.clone());
        c.init(None).unwrap();
        println!("{} populated in {:?}", kind, start.elapsed());

        for _ in 0..100_000 {
            let i = rng.gen_range(0..ids.len());
            let j = rng.gen_range(0..ids.len());
            assert!(c.lookup(&ids[i], &ids[j]).is_some());
        }
        c.dispose();
    }
}

/// Repeated init/dispose cycles must not leak or corrupt state
#[test]
#[ignore]
fn test_repeated_init_dispose_cycles() {
    let catalog = Arc::new(Catalog::synthetic(256));
    let ids = catalog.identifiers();

    for kind in StrategyKind::ALL {
        let mut c = kind.build(catalog.clone());
        for round in 0..50 {
            let requested = (round * 5) % 256 + 1;
            c.init(Some(requested)).unwrap();
            assert_eq!(c.len(), requested * requested);
            assert!(c.lookup(&ids[requested - 1], &ids[0]).is_some());
            c.dispose();
        }
    }
}
