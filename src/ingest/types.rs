// src/ingest/types.rs
use anyhow::Result;

/// One raw item as obtained from any source, before enrichment.
/// `summary` may still carry markup; `published_at` is the source-native
/// date text (RFC-2822 for feeds, a bare row date for listing pages).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub published_at: Option<String>,
    pub source: String, // e.g. "국가법령정보센터"
}

#[async_trait::async_trait]
pub trait SourceProvider: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<RawEntry>>;
    fn name(&self) -> &'static str;
}
