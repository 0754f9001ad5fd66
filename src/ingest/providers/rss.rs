// src/ingest/providers/rss.rs
//! Syndication-feed provider for legal-notice sources publishing RSS.

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::types::{RawEntry, SourceProvider};
use crate::normalize::normalize_text;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

pub struct RssProvider {
    source: String,
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl RssProvider {
    /// Feed body supplied directly, for tests and offline replay.
    pub fn from_fixture(source: impl Into<String>, body: &str) -> Self {
        Self {
            source: source.into(),
            mode: Mode::Fixture(body.to_string()),
        }
    }

    pub fn from_url(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mode: Mode::Http {
                url: url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    fn parse_entries_from_str(&self, s: &str) -> Result<Vec<RawEntry>> {
        let t0 = std::time::Instant::now();
        let xml_clean = scrub_html_entities_for_xml(s);
        let rss: Rss = from_str(&xml_clean).context("parsing legal-notice rss xml")?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let title = normalize_text(it.title.as_deref().unwrap_or_default());
            // description stays raw; the record mapper normalizes it and the
            // date extractor wants the full text anyway
            out.push(RawEntry {
                title,
                url: it.link.unwrap_or_default(),
                summary: it.description.unwrap_or_default(),
                published_at: it.pub_date,
                source: self.source.clone(),
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("ingest_parse_ms").record(ms);
        counter!("ingest_entries_total").increment(out.len() as u64);
        Ok(out)
    }
}

#[async_trait]
impl SourceProvider for RssProvider {
    async fn fetch_entries(&self) -> Result<Vec<RawEntry>> {
        match &self.mode {
            Mode::Fixture(s) => self.parse_entries_from_str(s),
            Mode::Http { url, client } => {
                let body = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("rss get {url}"))?
                    .text()
                    .await
                    .context("rss body .text()")?;
                self.parse_entries_from_str(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "rss"
    }
}

/// Feeds in the wild ship HTML entities that are not XML entities; scrub the
/// usual suspects before handing the body to the XML parser.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
