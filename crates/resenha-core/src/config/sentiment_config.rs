use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the polarity lexicon comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconSource {
    /// The embedded Portuguese lexicon (`ptbr-v1`).
    Embedded,
    /// A TOML file: `version = "..."` plus a `[weights]` table.
    Path(PathBuf),
}

/// Sentiment scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    pub lexicon: LexiconSource,
    /// Polarity above this magnitude is labeled positive.
    pub positive_threshold: f64,
    /// Polarity below minus this magnitude is labeled negative.
    pub negative_threshold: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconSource::Embedded,
            positive_threshold: defaults::DEFAULT_SENTIMENT_THRESHOLD,
            negative_threshold: defaults::DEFAULT_SENTIMENT_THRESHOLD,
        }
    }
}
