//! Type identifiers
//!
//! A [`TypeId`] is an opaque, named token for one entry of a
//! [`Catalog`](crate::Catalog). It carries:
//! - a display name, used only to synthesize stored values
//! - a 32-bit hash, used as a key component by every container strategy
//!
//! Identity is by position in the catalog. The hash is a derived projection
//! and may collide between distinct identifiers.

use std::fmt;
use std::sync::Arc;
use xxhash_rust::xxh3::xxh3_64;

/// Opaque, named, hashable identifier for one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId {
    name: Arc<str>,
    hash: i32,
}

impl TypeId {
    /// Create an identifier whose hash is derived from its name
    ///
    /// The hash is the low 32 bits of the XXH3 digest of the name bytes,
    /// so it is stable across runs and processes.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let hash = name_hash(&name);
        Self { name, hash }
    }

    /// Create an identifier with an explicit hash
    ///
    /// Used when the host environment supplies its own hash codes.
    pub fn with_hash(name: impl Into<Arc<str>>, hash: i32) -> Self {
        Self {
            name: name.into(),
            hash,
        }
    }

    /// Display name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 32-bit hash used as a key component
    #[inline]
    pub fn hash(&self) -> i32 {
        self.hash
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn name_hash(name: &str) -> i32 {
    xxh3_64(name.as_bytes()) as u32 as i32
}
