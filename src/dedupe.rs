// src/dedupe.rs
//! Identity-key deduplication across merged sources.

use std::collections::HashSet;

use crate::record::EnrichedRecord;

/// Collapse records by `(title, url)` identity key.
///
/// Single left-to-right pass; the first occurrence wins and input order is
/// preserved, so merging sources in a fixed order keeps the result
/// deterministic. Idempotent by construction.
pub fn dedupe(records: Vec<EnrichedRecord>) -> Vec<EnrichedRecord> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(records.len());
    let mut out = Vec::with_capacity(records.len());
    for rec in records {
        if seen.insert((rec.title.clone(), rec.url.clone())) {
            out.push(rec);
        }
    }
    out
}
