//! Key encoders
//!
//! Pure functions mapping a pair of identifiers to a storage key.
//!
//! # Composite key arithmetic
//!
//! [`composite_key`] places the first hash in the high 32 bits and *adds*
//! the sign-extended second hash rather than OR-ing it in. For a negative
//! second hash the addition borrows from the high half, so the upper 32 bits
//! of the key are `hash(a) - 1` and the key cannot be split back into its two
//! hashes with shifts and masks. Keys remain distinct for distinct hash
//! pairs; two entries only share a key when their identifiers share hashes,
//! in which case the later insert overwrites the earlier value.

use pairbench_core::{Error, Result, TypeId};

/// 64-bit key: `(hash(a) << 32) + hash(b)`, both hashes sign-extended
#[inline]
pub fn composite_key(a: &TypeId, b: &TypeId) -> u64 {
    let high = (a.hash() as i64 as u64) << 32;
    let low = b.hash() as i64 as u64;
    high.wrapping_add(low)
}

/// 64-bit key parsed from the decimal text of both hashes concatenated
///
/// `(12, 345)` becomes `12345`. Much slower than [`composite_key`] and kept
/// as a comparison point.
///
/// # Errors
///
/// Returns [`Error::KeyEncoding`] when the text is not a valid `u64`: either
/// hash is negative, or the concatenation overflows.
pub fn concat_key(a: &TypeId, b: &TypeId) -> Result<u64> {
    let text = format!("{}{}", a.hash(), b.hash());
    text.parse::<u64>().map_err(|_| Error::KeyEncoding {
        left: a.hash(),
        right: b.hash(),
    })
}

/// Independent outer/inner keys for the nested-map strategy
#[inline]
pub fn nested_keys(a: &TypeId, b: &TypeId) -> (i32, i32) {
    (a.hash(), b.hash())
}

/// Encoder used by the single-map composite strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyEncoding {
    /// [`composite_key`]
    #[default]
    Shifted,
    /// [`concat_key`]
    DecimalConcat,
}

impl KeyEncoding {
    /// Encode the pair with this encoder
    #[inline]
    pub fn encode(self, a: &TypeId, b: &TypeId) -> Result<u64> {
        match self {
            KeyEncoding::Shifted => Ok(composite_key(a, b)),
            KeyEncoding::DecimalConcat => concat_key(a, b),
        }
    }
}
