//! The run's output: per-review results keyed by review id, the fitted
//! topic model when available, the aggregate tables, and the
//! diagnostics trail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use resenha_aggregate::AggregateTables;
use resenha_core::models::{
    Diagnostic, DocumentTopicWeights, SentimentResult, ThemeClassification,
};
use resenha_topics::FittedTopicModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// One entry per review.
    pub sentiments: BTreeMap<String, SentimentResult>,
    /// One entry per review; empty matches = unclassified.
    pub themes: BTreeMap<String, ThemeClassification>,
    /// One entry per review when the topic fit succeeded, empty when it
    /// was skipped.
    pub topic_weights: BTreeMap<String, DocumentTopicWeights>,
    /// Absent when topic analysis was skipped; the skip is recorded in
    /// `diagnostics`.
    pub topic_model: Option<FittedTopicModel>,
    pub tables: AggregateTables,
    /// Every degraded or skipped path of the run, with cause.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Whether topic-dependent outputs are present.
    pub fn has_topics(&self) -> bool {
        self.topic_model.is_some()
    }
}
