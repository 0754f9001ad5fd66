// src/ingest/providers/mod.rs
pub mod listing;
pub mod rss;

pub use listing::ListingProvider;
pub use rss::RssProvider;
