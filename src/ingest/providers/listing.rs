// src/ingest/providers/listing.rs
//! Server-rendered listing-page provider.
//!
//! The listing pages render notice rows as table rows (with a `<ul><li>`
//! layout on some mirrors), each carrying a link and usually a date cell.
//! The full row text travels along as the summary so the date extractor can
//! still see a listed enforcement date when no detail text exists.

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};
use once_cell::sync::OnceCell;
use regex::Regex;
use url::Url;

use crate::dates::first_date_token;
use crate::ingest::detail::{merge_into, parse_detail_fields};
use crate::ingest::types::{RawEntry, SourceProvider};
use crate::normalize::normalize_text;

fn re_tr() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap())
}

fn re_li() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap())
}

fn re_link() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<a[^>]+href\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#).unwrap()
    })
}

pub struct ListingProvider {
    source: String,
    mode: Mode,
    /// How many top rows get a detail-page fetch in HTTP mode.
    detail_limit: usize,
}

enum Mode {
    Fixture { page_url: String, body: String },
    Http { url: String, client: reqwest::Client },
}

impl ListingProvider {
    /// Page body supplied directly, for tests and offline replay.
    pub fn from_fixture(source: impl Into<String>, page_url: impl Into<String>, body: &str) -> Self {
        Self {
            source: source.into(),
            mode: Mode::Fixture {
                page_url: page_url.into(),
                body: body.to_string(),
            },
            detail_limit: 0,
        }
    }

    pub fn from_url(source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mode: Mode::Http {
                url: url.into(),
                client: reqwest::Client::new(),
            },
            detail_limit: 15,
        }
    }

    pub fn with_detail_limit(mut self, limit: usize) -> Self {
        self.detail_limit = limit;
        self
    }

    /// Extract raw entries from a rendered listing page.
    ///
    /// Table rows are tried first; the `<li>` layout only when no table row
    /// produced an entry, mirroring how the mirrors degrade.
    pub fn parse_rows(html: &str, page_url: &str, source: &str) -> Vec<RawEntry> {
        let t0 = std::time::Instant::now();

        let mut out = rows_to_entries(re_tr(), html, page_url, source);
        if out.is_empty() {
            out = rows_to_entries(re_li(), html, page_url, source);
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("ingest_parse_ms").record(ms);
        counter!("ingest_entries_total").increment(out.len() as u64);
        out
    }
}

fn rows_to_entries(row_re: &Regex, html: &str, page_url: &str, source: &str) -> Vec<RawEntry> {
    let mut out = Vec::new();
    for row in row_re.captures_iter(html) {
        let body = &row[1];
        let Some(link) = re_link().captures(body) else {
            continue;
        };
        let title = normalize_text(&link[2]);
        let href = resolve_href(page_url, &link[1]);
        if title.is_empty() || href.is_empty() {
            continue;
        }
        let row_text = normalize_text(body);
        let listed_date = first_date_token(&row_text).map(|d| d.format("%Y-%m-%d").to_string());
        out.push(RawEntry {
            title,
            url: href,
            summary: row_text,
            published_at: listed_date,
            source: source.to_string(),
        });
    }
    out
}

fn resolve_href(page_url: &str, href: &str) -> String {
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(u) => u.to_string(),
        Err(_) => href.to_string(),
    }
}

#[async_trait]
impl SourceProvider for ListingProvider {
    async fn fetch_entries(&self) -> Result<Vec<RawEntry>> {
        match &self.mode {
            Mode::Fixture { page_url, body } => {
                Ok(Self::parse_rows(body, page_url, &self.source))
            }
            Mode::Http { url, client } => {
                let body = client
                    .get(url)
                    .send()
                    .await
                    .with_context(|| format!("listing get {url}"))?
                    .text()
                    .await
                    .context("listing body .text()")?;
                let mut entries = Self::parse_rows(&body, url, &self.source);

                // Best-effort detail enrichment for the top rows; a failed
                // detail fetch leaves the row as listed.
                for entry in entries.iter_mut().take(self.detail_limit) {
                    match client.get(&entry.url).send().await {
                        Ok(resp) => {
                            if let Ok(detail_html) = resp.text().await {
                                merge_into(&parse_detail_fields(&detail_html), entry);
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = ?e, url = %entry.url, "detail fetch failed");
                        }
                    }
                }
                Ok(entries)
            }
        }
    }

    fn name(&self) -> &'static str {
        "listing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table><tbody>
          <tr><th>번호</th><th>법령명</th><th>시행일</th></tr>
          <tr><td>1</td><td><a href="/LSW/detail.do?id=1">주택임대차보호법 일부개정</a></td><td>2025.03.01</td></tr>
          <tr><td>2</td><td><a href="https://other.example/n/2">상법 일부개정</a></td><td>2025.04.01</td></tr>
          <tr><td>3</td><td>링크 없는 행</td><td>2025.05.01</td></tr>
        </tbody></table>"#;

    #[test]
    fn extracts_linked_rows_with_listed_dates() {
        let out = ListingProvider::parse_rows(PAGE, "https://www.law.go.kr/LSW/list.do", "국가법령정보센터");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "주택임대차보호법 일부개정");
        assert_eq!(out[0].url, "https://www.law.go.kr/LSW/detail.do?id=1");
        assert_eq!(out[0].published_at.as_deref(), Some("2025-03-01"));
        assert!(out[0].summary.contains("2025.03.01"));
        // absolute hrefs pass through untouched
        assert_eq!(out[1].url, "https://other.example/n/2");
    }

    #[test]
    fn falls_back_to_list_items_when_no_table_rows_match() {
        let html = r#"
            <ul>
              <li><a href="detail.do?id=9">형법 일부개정</a> 2025.06.01</li>
              <li>링크 없음</li>
            </ul>"#;
        let out = ListingProvider::parse_rows(html, "https://www.law.go.kr/LSW/list.do", "국가법령정보센터");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://www.law.go.kr/LSW/detail.do?id=9");
        assert_eq!(out[0].published_at.as_deref(), Some("2025-06-01"));
    }

    #[test]
    fn rows_without_dates_still_yield_entries() {
        let html = r#"<tr><td><a href="/x">테스트 공지</a></td></tr>"#;
        let out = ListingProvider::parse_rows(html, "https://www.law.go.kr/", "국가법령정보센터");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].published_at, None);
    }
}
