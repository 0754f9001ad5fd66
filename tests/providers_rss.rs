// tests/providers_rss.rs
use law_change_feed::ingest::providers::RssProvider;
use law_change_feed::ingest::types::SourceProvider;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>입법예고</title>
    <item>
      <title>주택임대차보호법 일부개정법률(안)</title>
      <link>https://www.law.go.kr/LSW/detail.do?id=1</link>
      <pubDate>Tue, 04 Feb 2025 09:30:00 +0900</pubDate>
      <description>&lt;p&gt;이 법은 2025. 3. 1.부터&amp;nbsp;시행한다&lt;/p&gt;</description>
    </item>
    <item>
      <title>단순 공지</title>
      <link>https://www.law.go.kr/LSW/detail.do?id=2</link>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn fixture_feed_parses_into_raw_entries() {
    let provider = RssProvider::from_fixture("국가법령정보센터", FEED);
    let out = provider.fetch_entries().await.unwrap();
    assert_eq!(out.len(), 2);

    assert_eq!(out[0].title, "주택임대차보호법 일부개정법률(안)");
    assert_eq!(out[0].url, "https://www.law.go.kr/LSW/detail.do?id=1");
    assert_eq!(
        out[0].published_at.as_deref(),
        Some("Tue, 04 Feb 2025 09:30:00 +0900")
    );
    // summary stays source-native; the record mapper normalizes it
    assert!(out[0].summary.contains("시행한다"));

    // missing optional fields degrade to empty, not errors
    assert_eq!(out[1].published_at, None);
    assert_eq!(out[1].summary, "");
}

#[tokio::test]
async fn broken_xml_is_an_error_not_a_panic() {
    let provider = RssProvider::from_fixture("테스트", "<rss><channel><item></rss>");
    assert!(provider.fetch_entries().await.is_err());
}
