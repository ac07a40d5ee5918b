//! Initial-probe distribution of a key population over a table's slots.
//!
//! Only the first slot each key hashes to is counted; collision resolution
//! is ignored. The counts show how evenly a hasher spreads the keys, which
//! bounds the probe lengths linear probing will see.

use crate::entry::Keyed;
use crate::error::TableError;
use crate::fixed_hash_table::FixedHashTable;
use crate::hash::SlotHasher;
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashDistribution {
    initial_probes: Vec<u32>,
}

impl HashDistribution {
    pub fn new(capacity: usize) -> Self {
        Self {
            initial_probes: vec![0; capacity],
        }
    }

    /// Count one key whose initial slot is `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn record(&mut self, index: usize) {
        self.initial_probes[index] += 1;
    }

    /// Hash `key` with the table's hasher and count its initial slot.
    ///
    /// # Panics
    ///
    /// Panics if `table` has a different capacity than this distribution.
    pub fn record_key<E, H>(
        &mut self,
        table: &FixedHashTable<E, H>,
        key: &str,
    ) -> Result<usize, TableError>
    where
        E: Keyed,
        H: SlotHasher,
    {
        assert_eq!(
            table.capacity(),
            self.initial_probes.len(),
            "table capacity does not match distribution capacity"
        );
        let index = table.hash(key)?;
        self.record(index);
        Ok(index)
    }

    pub fn capacity(&self) -> usize {
        self.initial_probes.len()
    }

    pub fn initial_probes(&self) -> &[u32] {
        &self.initial_probes
    }

    /// Number of keys recorded.
    pub fn total(&self) -> u64 {
        self.initial_probes.iter().map(|&c| c as u64).sum()
    }

    pub fn summary(&self) -> DistributionSummary {
        let max = self.initial_probes.iter().copied().max().unwrap_or(0) as usize;
        let mut cells_by_probes = vec![0usize; max + 1];
        for &c in &self.initial_probes {
            cells_by_probes[c as usize] += 1;
        }
        DistributionSummary {
            capacity: self.initial_probes.len(),
            cells_by_probes,
        }
    }

    /// One row per slot with a `*` for every key that hashed there.
    pub fn write_histogram<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "Histogram showing distribution of hash indices over the hash table: "
        )?;
        for (i, &c) in self.initial_probes.iter().enumerate() {
            writeln!(w, "At hashTable[{}]: {}", i, "*".repeat(c as usize))?;
        }
        Ok(())
    }

    pub fn write_summary<W: Write>(&self, w: W) -> io::Result<()> {
        self.summary().write_to(w)
    }
}

/// How many cells were the initial probe of exactly `k` keys, for each `k`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionSummary {
    capacity: usize,
    cells_by_probes: Vec<usize>,
}

impl DistributionSummary {
    pub fn cells_probed(&self, k: usize) -> usize {
        self.cells_by_probes.get(k).copied().unwrap_or(0)
    }

    pub fn empty_cells(&self) -> usize {
        self.cells_probed(0)
    }

    /// Largest number of keys sharing one initial slot.
    pub fn max_probes(&self) -> usize {
        self.cells_by_probes.len() - 1
    }

    /// Share of the table, in percent, probed exactly `k` times.
    pub fn percent(&self, k: usize) -> f64 {
        self.cells_probed(k) as f64 / self.capacity as f64 * 100.0
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w)?;
        writeln!(
            w,
            "There are {} empty cells in this Dictionary (hash table) -> \t{}% of the hash table is empty.",
            self.empty_cells(),
            sig4(self.percent(0))
        )?;
        writeln!(
            w,
            "There are {} elements inserted that have no synonyms -> \t{}% of the hash table has been probed only once (no collisions).",
            self.cells_probed(1),
            sig4(self.percent(1))
        )?;
        for k in 2..=self.max_probes() {
            let n = self.cells_probed(k);
            if n > 0 {
                writeln!(
                    w,
                    "There were {} indexing keys that hashed into cells {} times -> \t{}% of the hash table has been probed {} times ({} collisions).",
                    n,
                    k,
                    sig4(self.percent(k)),
                    k,
                    k - 1
                )?;
            }
        }
        Ok(())
    }
}

// Four significant digits, trailing zeros trimmed: 2.919708 -> "2.92",
// 100.0 -> "100", 0.0 -> "0".
fn sig4(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{}", v);
    }
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (3 - magnitude).max(0) as usize;
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
