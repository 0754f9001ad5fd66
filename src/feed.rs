// src/feed.rs
//! Final feed assembly: ordering, capping, content ids, output shape.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;

use crate::classify::AmendmentType;
use crate::config::HeuristicsConfig;
use crate::record::EnrichedRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

/// Output projection of an `EnrichedRecord`, identity key replaced by a
/// content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub effective_date: Option<String>,
    pub announced_date: Option<String>,
    pub law_type: AmendmentType,
    pub source: FeedSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResult {
    /// Unix seconds at assembly time.
    pub generated_at: i64,
    pub items: Vec<FeedItem>,
}

/// Stable 128-bit content id: SHA-256 over the UTF-8 of
/// `title + effective_date_or_empty + url`, truncated to 16 bytes, hex.
pub fn content_id(title: &str, effective_date: Option<&str>, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(effective_date.unwrap_or_default().as_bytes());
    hasher.update(url.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(32);
    for b in digest.iter().take(16) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

/// Sort the selected records, cap at `cfg.feed_cap`, and stamp the result.
///
/// Ordering: dated records first, newest effective date leading (descending
/// lexicographic compare is exact on the fixed-width ISO form); undated
/// records follow, title-descending purely for determinism. `generated_at`
/// is passed in by the caller so assembly itself stays clock-free.
pub fn assemble(
    mut records: Vec<EnrichedRecord>,
    generated_at: i64,
    cfg: &HeuristicsConfig,
) -> FeedResult {
    records.sort_by(|a, b| match (&a.effective_date, &b.effective_date) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.title.cmp(&a.title),
    });
    records.truncate(cfg.feed_cap);

    let items = records
        .into_iter()
        .map(|rec| FeedItem {
            id: content_id(&rec.title, rec.effective_date.as_deref(), &rec.url),
            title: rec.title.clone(),
            summary: rec.summary,
            effective_date: rec.effective_date,
            announced_date: rec.published_date.map(|d| d.format("%Y-%m-%d").to_string()),
            law_type: rec.amendment_type,
            source: FeedSource {
                name: rec.source,
                url: rec.url,
            },
        })
        .collect();

    FeedResult {
        generated_at,
        items,
    }
}
