// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod classify;
pub mod config;
pub mod dates;
pub mod dedupe;
pub mod engine;
pub mod feed;
pub mod ingest;
pub mod normalize;
pub mod record;
pub mod select;

// ---- Re-exports for stable public API ----
pub use crate::classify::{classify, AmendmentType};
pub use crate::config::HeuristicsConfig;
pub use crate::dates::extract_effective_date;
pub use crate::engine::run_pipeline;
pub use crate::feed::{FeedItem, FeedResult};
pub use crate::ingest::types::{RawEntry, SourceProvider};
pub use crate::record::{map_record, EnrichedRecord};
