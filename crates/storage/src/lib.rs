//! Storage strategies for pairbench
//!
//! Each strategy maps an ordered pair of [`TypeId`](pairbench_core::TypeId)s
//! to a stored value and implements the shared [`PairContainer`] contract:
//! - CompositeKeyContainer: one FxHashMap keyed by a 64-bit composite of both hashes
//! - NestedMapContainer: FxHashMap of FxHashMaps, one probe per hash
//! - MatrixContainer: dense array addressed through the catalog index table
//!
//! Key encoders live in [`key`] and are pure functions of the two identifiers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composite;
pub mod container;
pub mod key;
pub mod matrix;
pub mod nested;

pub use composite::CompositeKeyContainer;
pub use container::{PairContainer, StrategyKind};
pub use key::{composite_key, concat_key, nested_keys, KeyEncoding};
pub use matrix::MatrixContainer;
pub use nested::NestedMapContainer;
