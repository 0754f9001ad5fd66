//! # Pipeline Engine
//! Pure, testable logic that maps a batch of `RawEntry` items to a
//! `FeedResult`. No I/O, suitable for unit tests and offline replay.
//!
//! Temporal context is explicit: the caller supplies `reference_date` and
//! `generated_at`, and no stage reads the ambient clock. Given the same
//! entries and dates, the output is byte-identical across runs.

use chrono::NaiveDate;

use crate::config::HeuristicsConfig;
use crate::dedupe::dedupe;
use crate::feed::{assemble, FeedResult};
use crate::ingest::types::RawEntry;
use crate::record::map_record;
use crate::select::select;

/// Run the full extraction-and-selection pipeline over merged raw entries.
///
/// Stages: map each entry independently (a bad entry nulls its own fields
/// and nothing else), dedupe by identity key, cascade-select, assemble.
pub fn run_pipeline(
    entries: Vec<RawEntry>,
    reference_date: NaiveDate,
    generated_at: i64,
    cfg: &HeuristicsConfig,
) -> FeedResult {
    let mapped: Vec<_> = entries
        .into_iter()
        .map(|e| map_record(e, reference_date, cfg))
        .collect();
    let unique = dedupe(mapped);
    let selected = select(&unique, reference_date, cfg);
    assemble(selected, generated_at, cfg)
}
