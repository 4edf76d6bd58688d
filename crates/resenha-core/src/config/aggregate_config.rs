use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Word-frequency table size (top-N).
    pub top_words: usize,
    /// Also produce per-sentiment word-frequency tables.
    pub split_word_frequency_by_sentiment: bool,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            top_words: defaults::DEFAULT_TOP_WORDS,
            split_word_frequency_by_sentiment: true,
        }
    }
}
