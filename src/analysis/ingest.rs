// src/analysis/ingest.rs
// =============================================================================
// Normalizes raw redirect records and removes duplicates.
//
// Two rows are duplicates when BOTH of their normalized endpoints match, e.g.
// "/old,/new" and "https://example.com/Old/,/new" describe the same redirect.
// The first row wins; later duplicates are dropped without complaint.
//
// Rust concepts:
// - HashSet with a derived Hash/Eq key struct for O(1) duplicate checks
// - Vec to keep first-seen order (a HashSet alone has no order)
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::normalize::normalize;

/// One row of the input, exactly as read (column order preserved on output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRecord {
    pub source: String,
    pub destination: String,
}

impl RedirectRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// A record together with its normalized path keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPair {
    pub record: RedirectRecord,
    pub source_key: String,
    pub dest_key: String,
}

impl NormalizedPair {
    pub fn from_record(record: RedirectRecord) -> Self {
        let source_key = normalize(&record.source);
        let dest_key = normalize(&record.destination);
        Self {
            record,
            source_key,
            dest_key,
        }
    }

    /// True when the redirect points back at its own source path
    pub fn is_loop(&self) -> bool {
        self.source_key == self.dest_key
    }

    fn key(&self) -> PairKey {
        PairKey {
            source_key: self.source_key.clone(),
            dest_key: self.dest_key.clone(),
        }
    }
}

// Dedup key. Comparing both fields structurally means no separator string can
// ever make two different pairs collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey {
    source_key: String,
    dest_key: String,
}

/// Normalizes every record and keeps the first occurrence of each
/// (source, destination) key, in first-seen order.
pub fn ingest<I>(records: I) -> Vec<NormalizedPair>
where
    I: IntoIterator<Item = RedirectRecord>,
{
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();

    for record in records {
        let pair = NormalizedPair::from_record(record);

        if seen.insert(pair.key()) {
            pairs.push(pair);
        } else {
            debug!(
                source = %pair.record.source,
                destination = %pair.record.destination,
                "dropping duplicate redirect {} -> {}",
                pair.source_key,
                pair.dest_key
            );
        }
    }

    pairs
}
