// src/classify.rs
//! Amendment classification from title + summary keywords.

use serde::{Deserialize, Serialize};

use crate::config::HeuristicsConfig;

/// Categorical tag for what a legal notice does to the law it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmendmentType {
    None,
    Amended,
    Enacted,
    Repealed,
}

/// Classify a notice from its title and summary.
///
/// Keyword groups are tested in priority order amendment → enactment →
/// repeal; the first group with a hit wins. Matching is exact and
/// case-sensitive on the Korean legal vocabulary. `None` means no group
/// matched at all; it is never inferred from dates or anything else.
pub fn classify(title: &str, summary: &str, cfg: &HeuristicsConfig) -> AmendmentType {
    let text = format!("{title} {summary}");
    if contains_any(&text, &cfg.amended_terms) {
        AmendmentType::Amended
    } else if contains_any(&text, &cfg.enacted_terms) {
        AmendmentType::Enacted
    } else if contains_any(&text, &cfg.repealed_terms) {
        AmendmentType::Repealed
    } else {
        AmendmentType::None
    }
}

fn contains_any(text: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| !t.is_empty() && text.contains(t.as_str()))
}
