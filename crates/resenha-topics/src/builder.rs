//! The topic model builder: one blocking fit per run, with a bounded
//! retry policy for degenerate corpora.

use tracing::{debug, warn};

use resenha_core::config::TopicConfig;
use resenha_core::errors::TopicError;
use resenha_core::models::TokenSequence;

use crate::model::{self, FittedTopicModel};
use crate::vocabulary::DocumentTermMatrix;

/// Builds the corpus-wide topic model. Externally a single synchronous
/// call; there is no streaming or incremental fitting.
#[derive(Debug, Clone)]
pub struct TopicModelBuilder {
    config: TopicConfig,
}

impl TopicModelBuilder {
    pub fn new(config: &TopicConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fit over the tokenized corpus. `review_ids` is parallel to
    /// `docs`. On a degenerate fit, retries up to the configured bound
    /// with a halved K (floor 2) and an advanced seed; an empty corpus
    /// is not retried. After exhausted retries the error reports every
    /// attempt so the caller can record the skip.
    pub fn fit(
        &self,
        review_ids: &[String],
        docs: &[TokenSequence],
    ) -> Result<FittedTopicModel, TopicError> {
        if docs.is_empty() {
            return Err(TopicError::EmptyCorpus);
        }

        let dtm = DocumentTermMatrix::build(docs, &self.config);
        debug!(
            n_docs = docs.len(),
            vocab = dtm.vocabulary().len(),
            "document-term matrix built"
        );

        let mut k = self.config.topic_count;
        let mut seed = self.config.seed;
        let attempts = self.config.max_retries + 1;
        let mut last_error = None;

        for attempt in 0..attempts {
            match model::fit(
                &dtm,
                review_ids,
                k,
                self.config.max_iterations,
                self.config.top_keywords,
                seed,
            ) {
                Ok(fitted) => {
                    if attempt > 0 {
                        warn!(
                            attempt,
                            effective_k = k,
                            "topic model fitted after retrying with reduced K"
                        );
                    }
                    return Ok(fitted);
                }
                Err(TopicError::EmptyCorpus) => return Err(TopicError::EmptyCorpus),
                Err(e) => {
                    warn!(attempt, k, seed, error = %e, "topic model fit failed");
                    last_error = Some(e);
                    // Reduced K and a fresh seed for the next attempt.
                    k = (k / 2).max(2);
                    seed = seed.wrapping_add(1);
                }
            }
        }

        Err(TopicError::RetriesExhausted {
            attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}
