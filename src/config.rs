// src/config.rs
//! Heuristics as configuration: anchor keywords, window sizes, classifier
//! vocabulary, year bounds, and selection caps live in one TOML file so tuning
//! a heuristic never means forking a pipeline stage.
//!
//! Load order: $LAW_FEED_CONFIG_PATH, then config/heuristics.toml, then the
//! compiled-in defaults.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ENV_CONFIG_PATH: &str = "LAW_FEED_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/heuristics.toml";

/// Tunable knobs for the extraction-and-selection pipeline.
///
/// Every field has a compiled-in default; a config file may override any
/// subset of them.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeuristicsConfig {
    /// Markers meaning "enters into force" that scope the date search.
    pub anchors: Vec<String>,
    /// Window size in chars before an anchor hit.
    pub window_before: usize,
    /// Window size in chars after an anchor hit.
    pub window_after: usize,
    /// Inclusive year bounds for a date token to count as a real candidate.
    pub year_min: i32,
    pub year_max: i32,
    /// Classifier keyword groups, tested in this priority order.
    pub amended_terms: Vec<String>,
    pub enacted_terms: Vec<String>,
    pub repealed_terms: Vec<String>,
    /// Tier-1 acceptance window in days from the reference date.
    pub horizon_days: i64,
    /// Per-tier result cap (tiers 2-4).
    pub tier_cap: usize,
    /// Final feed item cap.
    pub feed_cap: usize,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            anchors: vec!["시행".into(), "발효".into(), "부칙".into()],
            window_before: 100,
            window_after: 150,
            year_min: 2000,
            year_max: 2035,
            amended_terms: vec![
                "일부개정".into(),
                "전부개정".into(),
                "타법개정".into(),
                "개정".into(),
            ],
            enacted_terms: vec!["제정".into()],
            repealed_terms: vec!["폐지".into()],
            horizon_days: 90,
            tier_cap: 20,
            feed_cap: 30,
        }
    }
}

impl HeuristicsConfig {
    /// Parse a TOML document; unknown keys are ignored, missing keys default.
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing heuristics toml")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading heuristics config from {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Env var override, then the repo-default path, then built-in defaults.
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            return Self::load_from(&pb);
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from(&default_p);
        }
        info!("no heuristics config file found, using built-in defaults");
        Ok(Self::default())
    }
}
