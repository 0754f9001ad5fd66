// src/select.rs
//! Tiered selection over enriched records.
//!
//! Amendment classification and date extraction are heuristics and often
//! fail to fire on real notices, so selection cascades through progressively
//! looser tiers instead of raising "no qualifying data". The feed must show
//! something whenever any source data exists; only an empty input yields an
//! empty selection.

use chrono::{Duration, NaiveDate};

use crate::classify::AmendmentType;
use crate::config::HeuristicsConfig;
use crate::record::EnrichedRecord;

/// Apply the tier cascade, returning the first non-empty tier:
///
/// 1. amended, effective date within `[reference_date, +horizon_days]`
/// 2. amended with any effective date, newest effective date first
/// 3. amended regardless of date, most recently published first
/// 4. everything, most recently published first
///
/// Tiers 2-4 are capped at `cfg.tier_cap`.
pub fn select(
    records: &[EnrichedRecord],
    reference_date: NaiveDate,
    cfg: &HeuristicsConfig,
) -> Vec<EnrichedRecord> {
    let horizon_end = reference_date + Duration::days(cfg.horizon_days);

    let tier1: Vec<EnrichedRecord> = records
        .iter()
        .filter(|r| {
            r.amendment_type == AmendmentType::Amended
                && effective_on(r).is_some_and(|d| d >= reference_date && d <= horizon_end)
        })
        .cloned()
        .collect();
    if !tier1.is_empty() {
        return tier1;
    }

    let mut tier2: Vec<EnrichedRecord> = records
        .iter()
        .filter(|r| r.amendment_type == AmendmentType::Amended && r.effective_date.is_some())
        .cloned()
        .collect();
    if !tier2.is_empty() {
        // fixed-width ISO strings, so lexicographic descending == newest first
        tier2.sort_by(|a, b| b.effective_date.cmp(&a.effective_date));
        tier2.truncate(cfg.tier_cap);
        return tier2;
    }

    let mut tier3: Vec<EnrichedRecord> = records
        .iter()
        .filter(|r| r.amendment_type == AmendmentType::Amended)
        .cloned()
        .collect();
    if !tier3.is_empty() {
        sort_by_recency_desc(&mut tier3, reference_date);
        tier3.truncate(cfg.tier_cap);
        return tier3;
    }

    let mut tier4: Vec<EnrichedRecord> = records.to_vec();
    sort_by_recency_desc(&mut tier4, reference_date);
    tier4.truncate(cfg.tier_cap);
    tier4
}

fn effective_on(rec: &EnrichedRecord) -> Option<NaiveDate> {
    rec.effective_date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Recency = parsed publish date, with the reference date standing in for
/// unparseable ones. Stable sort keeps input order among ties.
fn sort_by_recency_desc(records: &mut [EnrichedRecord], reference_date: NaiveDate) {
    records.sort_by(|a, b| {
        let ra = a.published_date.unwrap_or(reference_date);
        let rb = b.published_date.unwrap_or(reference_date);
        rb.cmp(&ra)
    });
}
