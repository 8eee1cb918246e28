//! Type catalog
//!
//! The catalog is the fixed, ordered universe of [`TypeId`]s available to a
//! benchmark run. It is supplied by the host and never changes after
//! construction, so populate and lookup ranges are reproducible.
//!
//! Catalogs are shared as `Arc<Catalog>` between the driver and every
//! container built over them.

use crate::error::{Error, Result};
use crate::index::IndexTable;
use crate::TypeId;
use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use std::fmt;

/// Ordered, duplicate-free sequence of type identifiers
pub struct Catalog {
    ids: Vec<TypeId>,
    /// Built on first use, then shared read-only by every matrix container
    index: OnceCell<IndexTable>,
}

impl Catalog {
    /// Create a catalog from identifiers in enumeration order
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentifier`] if two identifiers share a
    /// display name.
    pub fn new(ids: impl IntoIterator<Item = TypeId>) -> Result<Self> {
        let ids: Vec<TypeId> = ids.into_iter().collect();
        let mut seen = FxHashSet::default();
        for id in &ids {
            if !seen.insert(id.name()) {
                return Err(Error::DuplicateIdentifier(id.name().to_string()));
            }
        }
        Ok(Self::from_vec(ids))
    }

    /// Create a catalog from display names, deriving each hash from its name
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|n| TypeId::new(n.as_ref())))
    }

    /// Create a catalog of `size` generated identifiers named `Type0000`, `Type0001`, ...
    pub fn synthetic(size: usize) -> Self {
        Self::from_vec(
            (0..size)
                .map(|i| TypeId::new(format!("Type{:04}", i)))
                .collect(),
        )
    }

    fn from_vec(ids: Vec<TypeId>) -> Self {
        Self {
            ids,
            index: OnceCell::new(),
        }
    }

    /// Number of identifiers
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the catalog is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&TypeId> {
        self.ids.get(index)
    }

    /// All identifiers, in enumeration order
    #[inline]
    pub fn identifiers(&self) -> &[TypeId] {
        &self.ids
    }

    /// Iterate identifiers in enumeration order
    pub fn iter(&self) -> std::slice::Iter<'_, TypeId> {
        self.ids.iter()
    }

    /// Catalog index of the identifier named `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.ids.iter().position(|id| id.name() == name)
    }

    /// Shared hash → position table, built on first call
    ///
    /// Safe to call from many threads at once: exactly one initializer runs
    /// and every caller observes the same table.
    pub fn index_table(&self) -> &IndexTable {
        self.index.get_or_init(|| IndexTable::build(&self.ids))
    }

    /// The index table if it has already been built
    pub fn index_table_if_built(&self) -> Option<&IndexTable> {
        self.index.get()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.ids.len())
            .field("index_built", &self.index.get().is_some())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TypeId;
    type IntoIter = std::slice::Iter<'a, TypeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
