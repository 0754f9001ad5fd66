// tests/pipeline_e2e.rs
// Full run: mock providers -> ingest merge -> pipeline -> feed JSON.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use law_change_feed::ingest::types::{RawEntry, SourceProvider};
use law_change_feed::{ingest, run_pipeline, HeuristicsConfig};
use std::collections::HashSet;

struct MockProvider {
    entries: Vec<RawEntry>,
}

#[async_trait]
impl SourceProvider for MockProvider {
    async fn fetch_entries(&self) -> Result<Vec<RawEntry>> {
        Ok(self.entries.clone())
    }
    fn name(&self) -> &'static str {
        "MockProvider"
    }
}

fn entry(title: &str, url: &str, summary: &str, published_at: Option<&str>) -> RawEntry {
    RawEntry {
        title: title.to_string(),
        url: url.to_string(),
        summary: summary.to_string(),
        published_at: published_at.map(str::to_string),
        source: "국가법령정보센터".to_string(),
    }
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

#[tokio::test]
async fn two_sources_merge_dedupe_and_rank() {
    let a = MockProvider {
        entries: vec![
            entry(
                "주택임대차보호법 일부개정",
                "https://law.example/1",
                "<p>이 법은 2025. 3. 1.부터 시행한다</p>",
                Some("Tue, 04 Feb 2025 09:30:00 +0900"),
            ),
            entry(
                "상법 일부개정",
                "https://law.example/2",
                "이 법은 2025. 2. 1.부터 시행한다",
                None,
            ),
        ],
    };
    // second source repeats an identity key with a different summary
    let b = MockProvider {
        entries: vec![entry(
            "주택임대차보호법 일부개정",
            "https://law.example/1",
            "중복 항목",
            None,
        )],
    };

    let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(a), Box::new(b)];
    let raw = ingest::run_once(&providers).await;
    assert_eq!(raw.len(), 3);

    let cfg = HeuristicsConfig::default();
    let feed = run_pipeline(raw, reference(), 1_700_000_000, &cfg);

    // both in-horizon amendments survive, newest effective date first
    let dates: Vec<_> = feed
        .items
        .iter()
        .map(|i| i.effective_date.as_deref().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-01", "2025-02-01"]);
    assert_eq!(feed.generated_at, 1_700_000_000);

    // first occurrence of the duplicated key won
    let dup = feed
        .items
        .iter()
        .find(|i| i.title == "주택임대차보호법 일부개정")
        .unwrap();
    assert!(dup.summary.contains("시행한다"));
    assert_eq!(dup.announced_date.as_deref(), Some("2025-02-04"));

    // no two items share an id
    let ids: HashSet<_> = feed.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), feed.items.len());
}

#[tokio::test]
async fn unclassified_batch_still_produces_a_feed() {
    let provider = MockProvider {
        entries: (0..5)
            .map(|i| {
                entry(
                    &format!("공지 {i}"),
                    &format!("https://law.example/n/{i}"),
                    "일반 공지사항",
                    None,
                )
            })
            .collect(),
    };
    let providers: Vec<Box<dyn SourceProvider>> = vec![Box::new(provider)];
    let raw = ingest::run_once(&providers).await;

    let feed = run_pipeline(raw, reference(), 0, &HeuristicsConfig::default());
    // tier-4 fallback: everything shows up rather than an empty feed
    assert_eq!(feed.items.len(), 5);
    assert!(feed.items.iter().all(|i| i.effective_date.is_none()));
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
    let entries = vec![
        entry("민법 일부개정", "https://law.example/10", "2026. 5. 1. 시행", None),
        entry("형법 일부개정", "https://law.example/11", "시행일 미정", None),
    ];
    let cfg = HeuristicsConfig::default();
    let a = run_pipeline(entries.clone(), reference(), 9, &cfg);
    let b = run_pipeline(entries, reference(), 9, &cfg);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
