//! Error kinds surfaced by the table and its hashers.

use std::num::ParseIntError;
use thiserror::Error;

/// Every failure a table operation can report. None of them leave the table
/// partially mutated.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("unable to insert: all {capacity} slots are occupied")]
    CapacityExhausted { capacity: usize },
    #[error("an entry with key {key:?} already exists")]
    DuplicateKey { key: String },
    #[error("the table is empty")]
    EmptyTable,
    #[error("no entry with key {key:?}")]
    NotFound { key: String },
    #[error("key {key:?} is not an unsigned decimal integer")]
    MalformedKey {
        key: String,
        #[source]
        source: ParseIntError,
    },
    #[error("failed to write table contents: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// True for the two insertion rejections that leave the caller free to
    /// retry with another entry.
    pub fn is_insert_rejection(&self) -> bool {
        matches!(
            self,
            TableError::CapacityExhausted { .. } | TableError::DuplicateKey { .. }
        )
    }
}
