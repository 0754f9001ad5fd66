//! Law-Change Feed — Binary Entrypoint
//! Wires source providers to the pipeline and prints the feed JSON to stdout.
//!
//! Everything temporal is fixed once here (today + generation timestamp) and
//! threaded through; the library stages never read the clock themselves.

use law_change_feed::config::HeuristicsConfig;
use law_change_feed::engine::run_pipeline;
use law_change_feed::ingest;
use law_change_feed::ingest::providers::ListingProvider;
use law_change_feed::ingest::types::SourceProvider;
use tracing_subscriber::EnvFilter;

/// "시행 예정" full listing, no search term.
const TARGET_URLS: &[&str] =
    &["https://www.law.go.kr/LSW/lsSc.do?menuId=1&subMenuId=15&tabMenuId=81&eventGubun=060101"];

const SOURCE_NAME: &str = "국가법령정보센터";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = HeuristicsConfig::load_default()?;

    let providers: Vec<Box<dyn SourceProvider>> = TARGET_URLS
        .iter()
        .map(|u| Box::new(ListingProvider::from_url(SOURCE_NAME, *u)) as Box<dyn SourceProvider>)
        .collect();

    let entries = ingest::run_once(&providers).await;
    tracing::info!(count = entries.len(), "raw entries ingested");

    let now = chrono::Utc::now();
    let feed = run_pipeline(entries, now.date_naive(), now.timestamp(), &cfg);
    tracing::info!(items = feed.items.len(), "feed assembled");

    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
