use anyhow::{bail, Context, Result};

use crate::boosting::BoostConfig;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub boost: BoostConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = BoostConfig::default();
        let weight = |key: &str, default: f64| -> Result<f64> {
            match lookup(key) {
                Some(raw) => parse_weight(key, &raw),
                None => Ok(default),
            }
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            boost: BoostConfig {
                paper_intent: weight("RELEVANCE_PAPER_INTENT_BOOST", defaults.paper_intent)?,
                project_intent: weight("RELEVANCE_PROJECT_INTENT_BOOST", defaults.project_intent)?,
                experience_intent: weight(
                    "RELEVANCE_EXPERIENCE_INTENT_BOOST",
                    defaults.experience_intent,
                )?,
                index_match: weight("RELEVANCE_INDEX_MATCH_BOOST", defaults.index_match)?,
                title_match: weight("RELEVANCE_TITLE_MATCH_BOOST", defaults.title_match)?,
                metadata_overlap: weight(
                    "RELEVANCE_METADATA_OVERLAP_BOOST",
                    defaults.metadata_overlap,
                )?,
                no_match_penalty: weight("RELEVANCE_NO_MATCH_PENALTY", defaults.no_match_penalty)?,
            },
        })
    }
}

fn parse_weight(key: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    if !(0.0..=1.0).contains(&value) {
        bail!("{key} must be between 0 and 1, got {value}");
    }
    Ok(value)
}
