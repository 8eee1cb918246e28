//! Core types for pairbench
//!
//! This crate defines the foundational types shared by every container
//! strategy and the benchmark driver:
//! - TypeId: opaque named identifier with a 32-bit hash
//! - Catalog: the ordered, fixed universe of identifiers for a run
//! - IndexTable: lazily built hash → dense position table, one per catalog
//! - PopulationRange: the square sub-range populated by `init`
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod index;
pub mod range;
pub mod types;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use index::IndexTable;
pub use range::{stored_value, PopulationRange};
pub use types::TypeId;
