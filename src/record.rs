// src/record.rs
//! Record enrichment: one `RawEntry` in, one `EnrichedRecord` out.
//!
//! Every parse step here is best-effort and resolves locally to `None` on
//! failure; a garbled entry must never abort the batch it arrived in.

use chrono::{NaiveDate, NaiveDateTime};
use time::format_description::well_known::Rfc2822;
use time::{OffsetDateTime, UtcOffset};

use crate::classify::{classify, AmendmentType};
use crate::config::HeuristicsConfig;
use crate::dates::{extract_effective_date, first_date_token};
use crate::ingest::types::RawEntry;
use crate::normalize::normalize_text;

/// Enriched, immutable form of a source item. Later stages only filter,
/// reorder, and select; they never mutate these.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnrichedRecord {
    pub title: String,
    pub url: String,
    pub summary: String,
    /// `YYYY-MM-DD` when extraction succeeded, year within bounds.
    pub effective_date: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub amendment_type: AmendmentType,
    pub source: String,
}

/// Map one raw entry into an enriched record.
///
/// Date extraction runs only on classified entries: an unclassified notice
/// is not a date-bearing candidate, whatever numbers its text contains.
pub fn map_record(
    entry: RawEntry,
    reference_date: NaiveDate,
    cfg: &HeuristicsConfig,
) -> EnrichedRecord {
    let amendment_type = classify(&entry.title, &entry.summary, cfg);
    let effective_date = if amendment_type == AmendmentType::None {
        None
    } else {
        extract_effective_date(&entry.summary, reference_date, cfg)
    };
    let published_date = entry.published_at.as_deref().and_then(parse_published_date);

    EnrichedRecord {
        title: entry.title,
        url: entry.url,
        summary: normalize_text(&entry.summary),
        effective_date,
        published_date,
        amendment_type,
        source: entry.source,
    }
}

/// Parse a source-native publish date.
///
/// Primary format is RFC-2822 as used by the feeds; real-world items show up
/// with the timezone suffix missing or garbled, so a zone-less retry and a
/// bare date-token scan back it up. `None` on anything unparseable.
pub fn parse_published_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc2822) {
        let d = dt.to_offset(UtcOffset::UTC).date();
        return NaiveDate::from_ymd_opt(d.year(), u8::from(d.month()) as u32, d.day() as u32);
    }

    const RFC2822_NO_ZONE: &str = "%a, %d %b %Y %H:%M:%S";
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, RFC2822_NO_ZONE) {
        return Some(dt.date());
    }
    if let Some((head, _zone)) = trimmed.rsplit_once(' ') {
        if let Ok(dt) = NaiveDateTime::parse_from_str(head, RFC2822_NO_ZONE) {
            return Some(dt.date());
        }
    }

    first_date_token(trimmed)
}
