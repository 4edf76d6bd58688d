use serde::{Deserialize, Serialize};

use super::defaults;

/// Topic model builder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Number of latent topics (K).
    pub topic_count: usize,
    /// Ranked keywords reported per topic.
    pub top_keywords: usize,
    /// Terms must appear in at least this many documents.
    pub min_doc_freq: usize,
    /// Terms appearing in more than this ratio of documents are pruned.
    pub max_doc_ratio: f64,
    /// Vocabulary cap, by descending corpus frequency.
    pub max_features: usize,
    /// Iteration budget for a single fit.
    pub max_iterations: usize,
    /// Seed for reproducible fits.
    pub seed: u64,
    /// Bounded retries after a degenerate or failed fit. Each retry
    /// halves K (floor 2) and advances the seed.
    pub max_retries: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            topic_count: defaults::DEFAULT_TOPIC_COUNT,
            top_keywords: defaults::DEFAULT_TOPIC_KEYWORDS,
            min_doc_freq: defaults::DEFAULT_MIN_DOC_FREQ,
            max_doc_ratio: defaults::DEFAULT_MAX_DOC_RATIO,
            max_features: defaults::DEFAULT_MAX_FEATURES,
            max_iterations: defaults::DEFAULT_TOPIC_ITERATIONS,
            seed: defaults::DEFAULT_TOPIC_SEED,
            max_retries: defaults::DEFAULT_TOPIC_RETRIES,
        }
    }
}
