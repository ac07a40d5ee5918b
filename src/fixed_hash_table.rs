//! FixedHashTable: fixed-capacity dictionary with linear probing.

use crate::entry::Keyed;
use crate::error::TableError;
use crate::hash::{MixedDigitHasher, SlotHasher};
use core::fmt;
use log::{debug, trace};
use std::io;

/// Capacity used by the report driver when none is given.
pub const DEFAULT_CAPACITY: usize = 137;

/// Names the slot an entry was placed in. Entries never move, so a handle
/// stays valid for the lifetime of the table that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SlotHandle(usize);

impl SlotHandle {
    pub(crate) fn new(index: usize) -> Self {
        SlotHandle(index)
    }

    /// Slot index in `[0, capacity)`.
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn entry<'a, E, H>(&self, table: &'a FixedHashTable<E, H>) -> Option<&'a E>
    where
        E: Keyed,
        H: SlotHasher,
    {
        table.slot(self.0)
    }
}

/// Outcome of walking a probe sequence for one key.
enum Probe<'a, E> {
    Found(usize, &'a E),
    Vacant(usize),
    Exhausted,
}

#[derive(Debug)]
pub struct FixedHashTable<E, H = MixedDigitHasher> {
    hasher: H,
    slots: Box<[Option<E>]>,
    count: usize,
}

impl<E> FixedHashTable<E>
where
    E: Keyed,
{
    /// Create an empty table with `capacity` slots using the default hasher.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, MixedDigitHasher)
    }
}

impl<E> Default for FixedHashTable<E>
where
    E: Keyed,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Iterator over occupied slots in slot order.
pub struct Iter<'a, E> {
    it: core::iter::Enumerate<core::slice::Iter<'a, Option<E>>>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = (SlotHandle, &'a E);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .find_map(|(i, slot)| slot.as_ref().map(|e| (SlotHandle::new(i), e)))
    }
}

impl<'a, E, H> IntoIterator for &'a FixedHashTable<E, H>
where
    E: Keyed,
    H: SlotHasher,
{
    type Item = (SlotHandle, &'a E);
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, H> FixedHashTable<E, H>
where
    E: Keyed,
    H: SlotHasher,
{
    /// Create an empty table with `capacity` slots and a custom hasher.
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "FixedHashTable capacity must be non-zero");
        Self {
            hasher,
            slots: (0..capacity).map(|_| None).collect(),
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.slots.len() as f64
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Initial slot for `key`. Does not look at table contents.
    pub fn hash(&self, key: &str) -> Result<usize, TableError> {
        let index = self.hasher.slot_index(key, self.slots.len())?;
        debug_assert!(
            index < self.slots.len(),
            "hasher returned {} for capacity {}",
            index,
            self.slots.len()
        );
        Ok(index)
    }

    // Walks at most `capacity` slots from `start`. Linear probing keeps every
    // key on the occupied run that begins at its initial slot, so the first
    // empty slot ends the search.
    fn probe(&self, key: &str, start: usize) -> Probe<'_, E> {
        let cap = self.slots.len();
        for step in 0..cap {
            let i = (start + step) % cap;
            match &self.slots[i] {
                None => {
                    trace!("probe {:?}: slot {} empty after {} step(s)", key, i, step);
                    return Probe::Vacant(i);
                }
                Some(e) if e.key() == key => {
                    trace!("probe {:?}: match at slot {} after {} step(s)", key, i, step);
                    return Probe::Found(i, e);
                }
                Some(_) => {}
            }
        }
        Probe::Exhausted
    }

    /// Insert `entry`, taking ownership. On failure the entry is dropped and
    /// the table is unchanged.
    pub fn insert(&mut self, entry: E) -> Result<SlotHandle, TableError> {
        self.try_insert(entry).map_err(|(_, e)| e)
    }

    /// Like [`insert`](Self::insert), but hands a rejected entry back.
    pub fn try_insert(&mut self, entry: E) -> Result<SlotHandle, (E, TableError)> {
        let capacity = self.slots.len();
        if self.count == capacity {
            debug!("insert {:?} rejected: table full", entry.key());
            return Err((entry, TableError::CapacityExhausted { capacity }));
        }

        let start = match self.hash(entry.key()) {
            Ok(start) => start,
            Err(e) => return Err((entry, e)),
        };

        match self.probe(entry.key(), start) {
            Probe::Vacant(i) => {
                debug!(
                    "insert {:?}: hashed to {}, placed at {}",
                    entry.key(),
                    start,
                    i
                );
                self.slots[i] = Some(entry);
                self.count += 1;
                Ok(SlotHandle::new(i))
            }
            Probe::Found(i, _) => {
                debug!("insert {:?} rejected: duplicate at slot {}", entry.key(), i);
                let err = TableError::DuplicateKey {
                    key: entry.key().to_owned(),
                };
                Err((entry, err))
            }
            // Only reachable if count disagrees with the slots.
            Probe::Exhausted => Err((entry, TableError::CapacityExhausted { capacity })),
        }
    }

    /// Look up the entry stored under `key` along its probe sequence.
    pub fn get(&self, key: &str) -> Result<&E, TableError> {
        self.locate(key).map(|(_, e)| e)
    }

    /// Look up by the key of `target`; no other field of `target` is read.
    pub fn get_entry(&self, target: &E) -> Result<&E, TableError> {
        self.get(target.key())
    }

    pub fn find(&self, key: &str) -> Result<SlotHandle, TableError> {
        self.locate(key).map(|(i, _)| SlotHandle::new(i))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    fn locate(&self, key: &str) -> Result<(usize, &E), TableError> {
        if self.count == 0 {
            return Err(TableError::EmptyTable);
        }
        let start = self.hash(key)?;
        match self.probe(key, start) {
            Probe::Found(i, e) => Ok((i, e)),
            Probe::Vacant(_) | Probe::Exhausted => Err(TableError::NotFound {
                key: key.to_owned(),
            }),
        }
    }

    /// Entry stored at slot `index`, if any.
    pub fn slot(&self, index: usize) -> Option<&E> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            it: self.slots.iter().enumerate(),
        }
    }

    /// Visit every entry in slot order. Fails on an empty table.
    pub fn for_each<F>(&self, mut visit: F) -> Result<(), TableError>
    where
        F: FnMut(SlotHandle, &E),
    {
        if self.count == 0 {
            return Err(TableError::EmptyTable);
        }
        for (h, e) in self.iter() {
            visit(h, e);
        }
        Ok(())
    }

    /// Entries in slot order. Fails on an empty table.
    pub fn snapshot(&self) -> Result<Vec<&E>, TableError> {
        if self.count == 0 {
            return Err(TableError::EmptyTable);
        }
        Ok(self.iter().map(|(_, e)| e).collect())
    }
}

impl<E, H> FixedHashTable<E, H>
where
    E: Keyed + fmt::Display,
    H: SlotHasher,
{
    /// Write the slot-by-slot dump produced by `Display`. Fails on an empty
    /// table.
    pub fn write_contents<W: io::Write>(&self, mut w: W) -> Result<(), TableError> {
        if self.count == 0 {
            return Err(TableError::EmptyTable);
        }
        write!(w, "{}", self)?;
        Ok(())
    }
}

impl<E, H> fmt::Display for FixedHashTable<E, H>
where
    E: Keyed + fmt::Display,
    H: SlotHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Printing the Dictionary with {} elements: ", self.count)?;
        for (h, e) in self.iter() {
            writeln!(f, "HashTable[{}] = {}", h.index(), e)?;
        }
        Ok(())
    }
}
