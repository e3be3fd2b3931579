//! Run-wide sequential indexing
//!
//! Indices are a function of position in the concatenated sequence
//! (file order, then line order). There is no shared counter.

use crate::record::{ordinal, MatchRecord};

/// Flatten per-file batches and number every record from 1.
pub fn assign_indices<I>(batches: I) -> Vec<MatchRecord>
where
    I: IntoIterator<Item = Vec<MatchRecord>>,
{
    batches
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(pos, record)| MatchRecord {
            index: ordinal(pos),
            ..record
        })
        .collect()
}

/// Incremental form of `assign_indices` for the pipeline loop.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<MatchRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's records. Returns how many were added.
    pub fn push_batch(&mut self, batch: Vec<MatchRecord>) -> usize {
        let start = self.records.len();
        let added = batch.len();
        self.records.extend(
            batch
                .into_iter()
                .enumerate()
                .map(|(offset, record)| MatchRecord {
                    index: ordinal(start + offset),
                    ..record
                }),
        );
        added
    }

    /// Highest index assigned so far, or 0.
    pub fn total(&self) -> u32 {
        self.records.last().map_or(0, |record| record.index)
    }

    pub fn finish(self) -> Vec<MatchRecord> {
        self.records
    }
}
