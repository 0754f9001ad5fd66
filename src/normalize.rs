// src/normalize.rs
//! Markup-tolerant text normalization shared by every pipeline stage.
//!
//! Source documents arrive as RSS descriptions, table-row innerHTML, or
//! detail-page fragments; all of them funnel through `normalize_text` before
//! any keyword or date heuristic looks at them.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize a raw markup-laden fragment into plain single-spaced text.
///
/// Steps: decode HTML entities, strip `<...>` tags, collapse whitespace runs
/// to single spaces, trim both ends. Total function; empty input yields an
/// empty string.
pub fn normalize_text(raw: &str) -> String {
    // &nbsp; first, so it becomes a plain space instead of U+00A0
    let mut out = raw.replace("&nbsp;", " ");
    out = html_escape::decode_html_entities(&out).to_string();

    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_decodes_entities() {
        let s = "<p>민법&nbsp;일부개정 &amp; 시행</p>";
        assert_eq!(normalize_text(s), "민법 일부개정 & 시행");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        let s = "  이 법은 \n\t 2025. 3. 1.부터   시행한다  ";
        assert_eq!(normalize_text(s), "이 법은 2025. 3. 1.부터 시행한다");
    }

    #[test]
    fn tag_boundaries_become_spaces() {
        let s = "시행일<br>2025-03-01";
        assert_eq!(normalize_text(s), "시행일 2025-03-01");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }
}
