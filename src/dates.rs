// src/dates.rs
//! Effective-date extraction.
//!
//! Legal notices bury the enforcement date in boilerplate like
//! "이 법은 2025. 3. 1.부터 시행한다", usually near an anchor keyword
//! (시행/발효/부칙). Scanning whole documents blindly picks up publication
//! dates and historical references, so the extractor searches a window
//! around each anchor hit first and only falls back to a whole-text scan
//! when no anchored candidate survives validation.

use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use regex::Regex;

use crate::config::HeuristicsConfig;
use crate::normalize::normalize_text;

/// Date token tolerant of dot/dash/slash separators and the unit-suffixed
/// Korean form (2025년 3월 1일).
fn date_token_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d{4})\s*[.\-/년]\s*(\d{1,2})\s*[.\-/월]\s*(\d{1,2})").unwrap()
    })
}

/// Extract the effective date from a text fragment, formatted `YYYY-MM-DD`.
///
/// Tie-break: the earliest candidate on/after `reference_date` wins (the next
/// qualifying future date); when every candidate is in the past, the earliest
/// overall is treated as already-effective. Returns `None` when no valid
/// candidate exists anywhere in the text.
pub fn extract_effective_date(
    text: &str,
    reference_date: NaiveDate,
    cfg: &HeuristicsConfig,
) -> Option<String> {
    let text = normalize_text(text);
    let mut candidates: Vec<NaiveDate> = Vec::new();

    for anchor in &cfg.anchors {
        if anchor.is_empty() {
            continue;
        }
        for (pos, hit) in text.match_indices(anchor.as_str()) {
            let (start, end) =
                window_bounds(&text, pos, pos + hit.len(), cfg.window_before, cfg.window_after);
            scan_date_tokens(&text[start..end], cfg.year_min, cfg.year_max, &mut candidates);
        }
    }

    // No anchored candidate: scan the whole text instead of giving up.
    if candidates.is_empty() {
        scan_date_tokens(&text, cfg.year_min, cfg.year_max, &mut candidates);
    }

    pick_candidate(candidates, reference_date).map(|d| d.format("%Y-%m-%d").to_string())
}

/// First valid calendar-date token in a text, using the default year bounds.
/// Used by providers for listing-row dates, where no anchor context exists.
pub fn first_date_token(text: &str) -> Option<NaiveDate> {
    let defaults = HeuristicsConfig::default();
    let mut found = Vec::new();
    scan_date_tokens(text, defaults.year_min, defaults.year_max, &mut found);
    found.into_iter().next()
}

fn scan_date_tokens(segment: &str, year_min: i32, year_max: i32, out: &mut Vec<NaiveDate>) {
    for cap in date_token_re().captures_iter(segment) {
        let (Ok(y), Ok(m), Ok(d)) = (
            cap[1].parse::<i32>(),
            cap[2].parse::<u32>(),
            cap[3].parse::<u32>(),
        ) else {
            continue;
        };
        if y < year_min || y > year_max {
            continue;
        }
        // rejects 2월 30일 and friends
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            out.push(date);
        }
    }
}

fn pick_candidate(mut candidates: Vec<NaiveDate>, reference_date: NaiveDate) -> Option<NaiveDate> {
    candidates.sort();
    candidates
        .iter()
        .copied()
        .find(|d| *d >= reference_date)
        .or_else(|| candidates.first().copied())
}

/// Clamp a char-counted window around `[hit_start, hit_end)` to byte bounds.
fn window_bounds(
    text: &str,
    hit_start: usize,
    hit_end: usize,
    before: usize,
    after: usize,
) -> (usize, usize) {
    let start = text[..hit_start]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(hit_start);
    let end = text[hit_end..]
        .char_indices()
        .nth(after)
        .map(|(i, _)| hit_end + i)
        .unwrap_or(text.len());
    (start, end)
}
