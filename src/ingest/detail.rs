// src/ingest/detail.rs
//! Detail-page field extraction.
//!
//! Notice detail pages lay out their metadata as `<th>label</th><td>value</td>`
//! rows with wording that varies by ministry. Extraction is label-substring
//! based and best-effort: a page with none of the known labels yields empty
//! fields, never an error.

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::ingest::types::RawEntry;
use crate::normalize::normalize_text;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    /// 주요내용/골자 — the substantive summary.
    pub summary: String,
    /// 시행/발효 — effective-date wording, usually a date plus boilerplate.
    pub effective_text: String,
    /// 유형/구분 — notice category when the page states one.
    pub law_type: Option<String>,
}

fn re_row() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap())
}

fn re_th() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"(?is)<th[^>]*>(.*?)</th>").unwrap())
}

fn re_td() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").unwrap())
}

/// Pull labeled fields out of a detail-page document.
pub fn parse_detail_fields(html: &str) -> DetailFields {
    let mut labels: Vec<(String, String)> = Vec::new();
    for row in re_row().captures_iter(html) {
        let body = &row[1];
        let (Some(th), Some(td)) = (re_th().captures(body), re_td().captures(body)) else {
            continue;
        };
        let key = normalize_text(&th[1]);
        let val = normalize_text(&td[1]);
        if !key.is_empty() && !val.is_empty() {
            labels.push((key, val));
        }
    }

    let law_type = find_label(&labels, &["유형", "구분"]);
    DetailFields {
        summary: find_label(&labels, &["주요", "골자"]).unwrap_or_default(),
        effective_text: find_label(&labels, &["시행", "발효"]).unwrap_or_default(),
        law_type,
    }
}

fn find_label(labels: &[(String, String)], keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some((_, val)) = labels.iter().find(|(label, _)| label.contains(key)) {
            return Some(val.clone());
        }
    }
    None
}

/// Fold detail fields into a listing entry. The detail summary supersedes
/// the synthetic row text; the effective-date wording is appended behind its
/// anchor word so the date extractor finds it in-window.
pub fn merge_into(fields: &DetailFields, entry: &mut RawEntry) {
    if !fields.summary.is_empty() {
        entry.summary = fields.summary.clone();
    }
    if !fields.effective_text.is_empty() {
        entry.summary = format!("{} 시행 {}", entry.summary.trim(), fields.effective_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <table>
          <tr><th>법령 유형</th><td>일부개정</td></tr>
          <tr><th>주요내용</th><td><p>임대차 보호 기간&nbsp;연장</p></td></tr>
          <tr><th>시행일자</th><td>2025. 3. 1.</td></tr>
          <tr><td>라벨 없는 행</td></tr>
        </table>"#;

    #[test]
    fn pulls_labeled_fields() {
        let f = parse_detail_fields(PAGE);
        assert_eq!(f.summary, "임대차 보호 기간 연장");
        assert_eq!(f.effective_text, "2025. 3. 1.");
        assert_eq!(f.law_type.as_deref(), Some("일부개정"));
    }

    #[test]
    fn unknown_page_yields_empty_fields() {
        let f = parse_detail_fields("<html><body><p>아무 표도 없음</p></body></html>");
        assert_eq!(f, DetailFields::default());
    }

    #[test]
    fn merge_fills_summary_and_appends_effective_wording() {
        let f = parse_detail_fields(PAGE);
        let mut entry = RawEntry {
            title: "주택임대차보호법 일부개정".to_string(),
            url: "https://law.example/d/1".to_string(),
            summary: String::new(),
            published_at: None,
            source: "국가법령정보센터".to_string(),
        };
        merge_into(&f, &mut entry);
        assert!(entry.summary.starts_with("임대차 보호 기간 연장"));
        assert!(entry.summary.contains("시행 2025. 3. 1."));
    }
}
