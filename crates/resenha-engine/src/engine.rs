//! The engine: validate once, run per corpus.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use resenha_aggregate::{Aggregator, ReviewRecord};
use resenha_core::config::AnalysisConfig;
use resenha_core::errors::ResenhaResult;
use resenha_core::models::{
    Corpus, Diagnostic, DiagnosticStage, Review, SentimentResult, ThemeClassification,
    TokenSequence,
};
use resenha_sentiment::{Lexicon, SentimentScorer};
use resenha_text::Tokenizer;
use resenha_themes::ThemeClassifier;
use resenha_topics::TopicModelBuilder;

use crate::report::AnalysisReport;

/// Per-review intermediate results, produced in parallel and then
/// canonicalized by review id.
struct ReviewPass<'a> {
    review: &'a Review,
    tokens: TokenSequence,
    sentiment: SentimentResult,
    themes: ThemeClassification,
}

/// The text-analytics engine. Construction validates the configuration
/// and loads the lexicon; both are fatal on defect since they would
/// invalidate every result. After construction everything is read-only
/// and shared by the parallel workers without locking.
#[derive(Debug)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
    tokenizer: Tokenizer,
    scorer: SentimentScorer,
    classifier: ThemeClassifier,
    topic_builder: TopicModelBuilder,
    aggregator: Aggregator,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> ResenhaResult<Self> {
        config.validate()?;
        let lexicon = Lexicon::load(&config.sentiment.lexicon)?;
        info!(
            lexicon = lexicon.version(),
            axes = config.themes.taxonomy.axes.len(),
            topic_count = config.topics.topic_count,
            "analysis engine ready"
        );

        Ok(Self {
            tokenizer: Tokenizer::new(&config.tokenizer),
            scorer: SentimentScorer::new(lexicon, &config.sentiment),
            classifier: ThemeClassifier::new(&config.themes),
            topic_builder: TopicModelBuilder::new(&config.topics),
            aggregator: Aggregator::new(&config.aggregate, &config.themes.taxonomy),
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a corpus. Never fails: input defects are handled
    /// per-review and a topic-fit failure degrades to a recorded skip
    /// while sentiment and thematic outputs stay valid.
    pub fn run(&self, corpus: &Corpus) -> AnalysisReport {
        info!(reviews = corpus.len(), "starting analysis run");
        let mut diagnostics = Vec::new();

        // Per-review pass: reviews are independent, workers share only
        // read-only lexicon/taxonomy data. Order is restored afterwards.
        let mut passes: Vec<ReviewPass<'_>> = corpus
            .reviews()
            .par_iter()
            .map(|review| {
                let tokens = self.tokenizer.tokenize(&review.text);
                let sentiment = self.scorer.score(&review.review_id, &tokens);
                let themes = self.classifier.classify(&review.review_id, &tokens);
                ReviewPass {
                    review,
                    tokens,
                    sentiment,
                    themes,
                }
            })
            .collect();
        passes.sort_by(|a, b| a.review.review_id.cmp(&b.review.review_id));

        let empty_ids: Vec<String> = passes
            .iter()
            .filter(|p| p.tokens.is_empty())
            .map(|p| p.review.review_id.clone())
            .collect();
        if !empty_ids.is_empty() {
            debug!(count = empty_ids.len(), "reviews with no scorable tokens");
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticStage::Tokenizer,
                    "reviews with empty token sequences scored as neutral/unclassified",
                )
                .with_reviews(empty_ids),
            );
        }

        // Corpus-wide topic fit: a single blocking call. Failure must
        // not block the sentiment/theme outputs.
        let review_ids: Vec<String> = passes.iter().map(|p| p.review.review_id.clone()).collect();
        let docs: Vec<TokenSequence> = passes.iter().map(|p| p.tokens.clone()).collect();
        let topic_model = match self.topic_builder.fit(&review_ids, &docs) {
            Ok(model) => {
                info!(
                    effective_k = model.topic_count,
                    seed = model.seed,
                    iterations = model.iterations,
                    "topic model fitted"
                );
                Some(model)
            }
            Err(e) => {
                warn!(error = %e, "topic analysis skipped");
                diagnostics.push(
                    Diagnostic::error(
                        DiagnosticStage::Topics,
                        format!("topic analysis skipped: {e}"),
                    )
                    .with_reviews(review_ids.clone()),
                );
                None
            }
        };

        let records: Vec<ReviewRecord<'_>> = passes
            .iter()
            .map(|p| ReviewRecord {
                review: p.review,
                tokens: &p.tokens,
                sentiment: &p.sentiment,
                themes: &p.themes,
            })
            .collect();
        let tables = self
            .aggregator
            .aggregate(&records, topic_model.as_ref().map(|m| m.topics.as_slice()));

        let sentiments: BTreeMap<String, SentimentResult> = passes
            .iter()
            .map(|p| (p.review.review_id.clone(), p.sentiment.clone()))
            .collect();
        let themes: BTreeMap<String, ThemeClassification> = passes
            .iter()
            .map(|p| (p.review.review_id.clone(), p.themes.clone()))
            .collect();
        let topic_weights = topic_model
            .as_ref()
            .map(|m| {
                m.doc_weights
                    .iter()
                    .map(|w| (w.review_id.clone(), w.clone()))
                    .collect()
            })
            .unwrap_or_default();

        info!(
            diagnostics = diagnostics.len(),
            topics = topic_model.is_some(),
            "analysis run complete"
        );
        AnalysisReport {
            sentiments,
            themes,
            topic_weights,
            topic_model,
            tables,
            diagnostics,
        }
    }
}
