//! Engine configuration: named, enumerable options with study defaults.
//!
//! Config is constructed explicitly (or parsed from TOML), validated once
//! at engine construction, and then shared read-only. Nothing here is
//! mutated after load.

pub mod defaults;

mod aggregate_config;
mod sentiment_config;
mod theme_config;
mod tokenizer_config;
mod topic_config;

pub use aggregate_config::AggregateConfig;
pub use sentiment_config::{LexiconSource, SentimentConfig};
pub use theme_config::{Taxonomy, ThemeConfig, ThematicAxis};
pub use tokenizer_config::TokenizerConfig;
pub use topic_config::TopicConfig;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ResenhaResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub tokenizer: TokenizerConfig,
    pub sentiment: SentimentConfig,
    pub themes: ThemeConfig,
    pub topics: TopicConfig,
    pub aggregate: AggregateConfig,
}

impl AnalysisConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> ResenhaResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Malformed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> ResenhaResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Check every invariant that would invalidate downstream results.
    /// Called at engine construction; all failures are fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.themes.taxonomy.axes.is_empty() {
            return Err(ConfigError::EmptyTaxonomy);
        }
        let mut seen = HashSet::new();
        for axis in &self.themes.taxonomy.axes {
            if !seen.insert(axis.axis_id.as_str()) {
                return Err(ConfigError::DuplicateAxis {
                    axis_id: axis.axis_id.clone(),
                });
            }
            if axis.keywords.is_empty() || axis.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ConfigError::EmptyKeywordSet {
                    axis_id: axis.axis_id.clone(),
                });
            }
        }

        if self.topics.topic_count < 1 {
            return Err(ConfigError::InvalidTopicCount {
                requested: self.topics.topic_count,
            });
        }
        if !(self.topics.max_doc_ratio > 0.0 && self.topics.max_doc_ratio <= 1.0) {
            return Err(ConfigError::InvalidDocRatio {
                value: self.topics.max_doc_ratio,
            });
        }

        if self.sentiment.positive_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                threshold: "positive",
                value: self.sentiment.positive_threshold,
            });
        }
        if self.sentiment.negative_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                threshold: "negative",
                value: self.sentiment.negative_threshold,
            });
        }

        if self.aggregate.top_words == 0 {
            return Err(ConfigError::ZeroTopWords);
        }

        Ok(())
    }
}
