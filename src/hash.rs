//! Slot hashers: map a digit-string key to an index in `[0, capacity)`.
//!
//! Keys are parsed as unsigned 64-bit integers. The default hasher runs the
//! parsed value through the SplitMix64 finalizer before reducing it, so keys
//! that share low-order structure (sequential ids, common prefixes, strides
//! equal to the capacity) still spread across the whole table. The plain
//! modulo hasher is kept as a baseline to compare distributions against.

use crate::error::TableError;

/// Maps a key to its initial slot for a table of `capacity` slots.
///
/// Implementations must be pure and deterministic, and must return an index
/// strictly below `capacity` (which is never zero).
pub trait SlotHasher {
    fn slot_index(&self, key: &str, capacity: usize) -> Result<usize, TableError>;
}

/// Parse a key into the numeric form the digit hashers work on.
pub fn parse_key(key: &str) -> Result<u64, TableError> {
    key.parse::<u64>().map_err(|source| TableError::MalformedKey {
        key: key.to_string(),
        source,
    })
}

/// SplitMix64 output function (Steele, Lea, Flood 2014).
#[inline]
pub const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Default hasher: parse, mix, reduce.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MixedDigitHasher;

impl SlotHasher for MixedDigitHasher {
    #[inline]
    fn slot_index(&self, key: &str, capacity: usize) -> Result<usize, TableError> {
        debug_assert!(capacity > 0);
        let value = parse_key(key)?;
        Ok((mix64(value) % capacity as u64) as usize)
    }
}

/// Baseline hasher: the raw numeric value modulo the capacity.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ModuloDigitHasher;

impl SlotHasher for ModuloDigitHasher {
    #[inline]
    fn slot_index(&self, key: &str, capacity: usize) -> Result<usize, TableError> {
        debug_assert!(capacity > 0);
        let value = parse_key(key)?;
        Ok((value % capacity as u64) as usize)
    }
}
