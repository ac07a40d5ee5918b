//! Reads one indexing key per line, inserts each as a `Profile` and reports
//! how evenly the hasher spread the keys over the table.
//!
//! ```text
//! hash-report dataFile_100_16.txt
//! hash-report --baseline --capacity 101 keys.txt
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use fixed_hashtable::logger::initialize_logger;
use fixed_hashtable::{
    FixedHashTable, HashDistribution, MixedDigitHasher, ModuloDigitHasher, Profile, SlotHasher,
    TableError, DEFAULT_CAPACITY,
};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about = "Histogram of initial hash indices for a file of keys")]
struct Opts {
    /// File with one key per line
    file: PathBuf,
    /// Number of slots in the table
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
    /// Use the plain modulo hasher instead of the mixing hasher
    #[arg(long)]
    baseline: bool,
}

fn main() -> Result<()> {
    initialize_logger();
    let opts = Opts::parse();
    anyhow::ensure!(opts.capacity > 0, "--capacity must be at least 1");

    let file = File::open(&opts.file)
        .with_context(|| format!("unable to open {}", opts.file.display()))?;
    let reader = BufReader::new(file);

    let stdout = io::stdout();
    let out = stdout.lock();
    if opts.baseline {
        run(reader, out, opts.capacity, ModuloDigitHasher)
    } else {
        run(reader, out, opts.capacity, MixedDigitHasher)
    }
}

fn run<R, W, H>(reader: R, mut out: W, capacity: usize, hasher: H) -> Result<()>
where
    R: BufRead,
    W: Write,
    H: SlotHasher,
{
    let mut table: FixedHashTable<Profile, H> = FixedHashTable::with_hasher(capacity, hasher);
    let mut distribution = HashDistribution::new(capacity);

    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", n + 1))?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }

        // Hash before inserting: a full table rejects without hashing, so a
        // malformed key would otherwise only surface here.
        match distribution.record_key(&table, key) {
            Ok(_) => {}
            Err(TableError::MalformedKey { source, .. }) => {
                warn!("line {}: skipping key {:?}: {}", n + 1, key, source);
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        match table.try_insert(Profile::new(key)) {
            Ok(_) => {}
            Err((profile, TableError::DuplicateKey { .. })) => {
                writeln!(
                    out,
                    "in hash-report: Profile userName = {} already exists!",
                    profile
                )?;
            }
            Err((profile, e)) => {
                warn!("line {}: {} not inserted: {}", n + 1, profile, e);
            }
        }
    }
    info!(
        "{} of {} slots occupied (load factor {:.2})",
        table.occupied_count(),
        table.capacity(),
        table.load_factor()
    );

    match table.write_contents(&mut out) {
        Ok(()) | Err(TableError::EmptyTable) => {}
        Err(e) => return Err(e.into()),
    }
    distribution.write_histogram(&mut out)?;
    distribution.write_summary(&mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(input: &str, capacity: usize) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, capacity, MixedDigitHasher).expect("report runs");
        String::from_utf8(out).unwrap()
    }

    fn stars(text: &str) -> usize {
        text.lines()
            .filter(|l| l.starts_with("At hashTable["))
            .map(|l| l.matches('*').count())
            .sum()
    }

    /// A malformed key read after the table fills up is skipped like any
    /// other malformed key; the report is still printed in full.
    #[test]
    fn malformed_key_on_full_table_is_skipped() {
        let text = report("1\n2\nabc\n3\n", 2);
        assert!(text.contains("Printing the Dictionary with 2 elements: "));
        assert!(text.contains("Histogram showing distribution"));
        assert!(text.contains("empty cells in this Dictionary"));
        // "1", "2" and the rejected "3" are counted; "abc" is not.
        assert_eq!(stars(&text), 3);
    }

    #[test]
    fn malformed_key_with_room_is_skipped() {
        let text = report("1\nabc\n3\n", 5);
        assert!(text.contains("Printing the Dictionary with 2 elements: "));
        assert_eq!(stars(&text), 2);
    }

    /// Duplicates print the rejection message and still count as an initial
    /// probe.
    #[test]
    fn duplicate_line_reported() {
        let text = report("42\n42\n7\n", 11);
        assert!(text.contains("in hash-report: Profile userName = 42 already exists!"));
        assert!(text.contains("Printing the Dictionary with 2 elements: "));
        assert_eq!(stars(&text), 3);
    }

    #[test]
    fn blank_lines_skipped() {
        let text = report("\n  \n7\n\n", 5);
        assert!(text.contains("Printing the Dictionary with 1 elements: "));
        assert_eq!(stars(&text), 1);
    }

    /// With nothing inserted the dump is omitted but the histogram and
    /// summary are still written.
    #[test]
    fn all_blank_input_skips_dump() {
        let text = report("\n\n   \n", 3);
        assert!(!text.contains("Printing the Dictionary"));
        assert!(text.contains("At hashTable[2]: \n"));
        assert!(text.contains("There are 3 empty cells in this Dictionary"));
        assert_eq!(stars(&text), 0);
    }

    #[test]
    fn baseline_hasher_places_by_remainder() {
        let mut out = Vec::new();
        run("13\n23\n".as_bytes(), &mut out, 10, ModuloDigitHasher).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("HashTable[3] = 13"));
        assert!(text.contains("HashTable[4] = 23"));
        assert!(text.contains("At hashTable[3]: **"));
    }
}
