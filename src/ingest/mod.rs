// src/ingest/mod.rs
pub mod detail;
pub mod providers;
pub mod types;

use crate::ingest::types::{RawEntry, SourceProvider};
use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

/// One-time metrics registration (so series show up wherever they are scraped).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("ingest_entries_total", "Raw entries parsed from providers.");
        describe_counter!(
            "ingest_dropped_total",
            "Entries dropped for missing title or url."
        );
        describe_counter!(
            "ingest_provider_errors_total",
            "Provider fetch/parse errors."
        );
        describe_histogram!("ingest_parse_ms", "Provider parse time in milliseconds.");
    });
}

/// Fetch raw entries from every provider, in provider order.
///
/// A failing provider is logged and counted, never fatal; its entries are
/// simply absent from the batch. Results are concatenated in the given
/// provider order so downstream deduplication sees a deterministic sequence.
/// Entries without a title or url cannot form an identity key and are
/// dropped here.
pub async fn run_once(providers: &[Box<dyn SourceProvider>]) -> Vec<RawEntry> {
    ensure_metrics_described();

    let mut raw = Vec::new();
    for p in providers {
        match p.fetch_entries().await {
            Ok(mut v) => raw.append(&mut v),
            Err(e) => {
                tracing::warn!(error = ?e, provider = p.name(), "provider error");
                counter!("ingest_provider_errors_total").increment(1);
            }
        }
    }

    let before = raw.len();
    raw.retain(|e| !e.title.is_empty() && !e.url.is_empty());
    let dropped = before - raw.len();
    if dropped > 0 {
        tracing::info!(dropped, "dropped entries without identity key");
        counter!("ingest_dropped_total").increment(dropped as u64);
    }

    raw
}
