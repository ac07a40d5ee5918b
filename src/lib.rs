//! fixed-hashtable: a fixed-capacity dictionary keyed by unique strings,
//! using open addressing with linear probing.
//!
//! Internal Design:
//!
//! Summary
//! - `FixedHashTable<E, H>` owns a boxed slice of `Option<E>` slots and a
//!   count of occupied ones. Capacity is set at construction and never
//!   changes; a full table rejects inserts instead of growing.
//! - Entries implement `Keyed`; the table reads nothing but the key.
//! - The hasher is a type parameter (`SlotHasher`), mirroring the
//!   `BuildHasher` parameter of std maps. The default parses digit keys and
//!   mixes them with the SplitMix64 finalizer before reducing modulo the
//!   capacity.
//!
//! Constraints
//! - Single-threaded, synchronous. No internal locking; wrap in a `Mutex`
//!   for shared use.
//! - Unique keys: duplicate inserts fail and leave the table unchanged.
//! - No deletion. Slots only go from empty to occupied, which is what lets
//!   lookup stop at the first empty slot of a probe sequence and lets
//!   `SlotHandle`s stay valid for the table's lifetime.
//! - Every failure is a distinct `TableError` variant; no operation panics
//!   on bad input or mutates partially.
//!
//! Reporting
//! - `distribution::HashDistribution` records the initial slot of each key
//!   and renders the histogram and collision statistics printed by the
//!   `hash-report` binary.

pub mod distribution;
pub mod entry;
pub mod error;
pub mod fixed_hash_table;
mod fixed_hash_table_proptest;
pub mod hash;
pub mod logger;

// Public surface
pub use distribution::{DistributionSummary, HashDistribution};
pub use entry::{Keyed, Profile};
pub use error::TableError;
pub use fixed_hash_table::{FixedHashTable, Iter, SlotHandle, DEFAULT_CAPACITY};
pub use hash::{MixedDigitHasher, ModuloDigitHasher, SlotHasher};
