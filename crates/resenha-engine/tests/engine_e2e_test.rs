//! End-to-end scenarios for the full analysis engine.

use resenha_core::config::AnalysisConfig;
use resenha_core::constants::TOPIC_WEIGHT_TOLERANCE;
use resenha_core::errors::ResenhaError;
use resenha_core::models::{DiagnosticStage, SentimentLabel, Severity};
use resenha_engine::AnalysisEngine;
use test_fixtures::{corpus_from, sample_corpus};

fn engine(config: AnalysisConfig) -> AnalysisEngine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    AnalysisEngine::new(config).expect("valid config")
}

/// Config whose topic model can fit small test corpora.
fn small_corpus_config() -> AnalysisConfig {
    let mut config = AnalysisConfig::default();
    config.topics.min_doc_freq = 1;
    config
}

#[test]
fn negative_review_matches_stability_and_performance() {
    let corpus = corpus_from(&["aplicativo trava direto, muito lento"]);
    let report = engine(AnalysisConfig::default()).run(&corpus);

    let sentiment = &report.sentiments["r01"];
    assert_eq!(sentiment.label, SentimentLabel::Negative);

    let themes = &report.themes["r01"];
    let axes: Vec<&str> = themes.axis_ids().collect();
    assert!(axes.contains(&"functionality_stability"));
    assert!(axes.contains(&"performance"));
}

#[test]
fn empty_review_is_neutral_and_unclassified() {
    let corpus = corpus_from(&[""]);
    let report = engine(AnalysisConfig::default()).run(&corpus);

    let sentiment = &report.sentiments["r01"];
    assert_eq!(sentiment.polarity, 0.0);
    assert_eq!(sentiment.label, SentimentLabel::Neutral);
    assert!(report.themes["r01"].is_unclassified());

    // The empty token sequence is on the diagnostic trail.
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.stage == DiagnosticStage::Tokenizer
            && d.affected_review_ids == vec!["r01".to_string()]));
}

#[test]
fn degenerate_corpus_skips_topics_but_keeps_other_tables() {
    // Three distinct vocabulary terms with K=5 and no retries.
    let mut config = AnalysisConfig::default();
    config.topics.min_doc_freq = 1;
    config.topics.max_doc_ratio = 1.0;
    config.topics.max_retries = 0;
    let corpus = corpus_from(&[
        "trava demais agora",
        "trava demais agora",
        "trava demais agora",
    ]);

    let report = engine(config).run(&corpus);

    assert!(!report.has_topics());
    assert!(report.topic_weights.is_empty());
    assert!(report.tables.topic_keywords.is_none());

    // Sentiment and thematic tables are still produced.
    let total: usize = report
        .tables
        .sentiment_distribution
        .iter()
        .map(|r| r.count)
        .sum();
    assert_eq!(total, 3);
    assert!(!report.tables.theme_distribution.is_empty());

    // The skip is recorded with cause and affected reviews.
    let skip = report
        .diagnostics
        .iter()
        .find(|d| d.stage == DiagnosticStage::Topics)
        .expect("topic skip diagnostic");
    assert_eq!(skip.severity, Severity::Error);
    assert!(skip.message.contains("skipped"));
    assert_eq!(skip.affected_review_ids.len(), 3);
}

#[test]
fn identical_runs_render_identical_tables() {
    let corpus = sample_corpus();
    let a = engine(small_corpus_config()).run(&corpus);
    let b = engine(small_corpus_config()).run(&corpus);
    assert_eq!(a.tables.render_all(), b.tables.render_all());
}

#[test]
fn topic_weights_cover_every_review_and_sum_to_one() {
    let corpus = sample_corpus();
    let report = engine(small_corpus_config()).run(&corpus);

    let model = report.topic_model.as_ref().expect("topics fitted");
    assert_eq!(model.seed, 42);
    assert_eq!(model.iterations, 20);
    assert_eq!(report.topic_weights.len(), corpus.len());

    for review in corpus.iter() {
        let weights = &report.topic_weights[&review.review_id];
        let sum: f64 = weights.weights.iter().sum();
        assert!((sum - 1.0).abs() < TOPIC_WEIGHT_TOLERANCE);
    }

    let topic_table = report.tables.topic_keywords.as_ref().unwrap();
    assert_eq!(topic_table.len(), model.topic_count);
}

#[test]
fn sentiment_distribution_covers_the_corpus() {
    let corpus = sample_corpus();
    let report = engine(small_corpus_config()).run(&corpus);
    let total: usize = report
        .tables
        .sentiment_distribution
        .iter()
        .map(|r| r.count)
        .sum();
    assert_eq!(total, corpus.len());
}

#[test]
fn word_frequency_respects_top_n_and_ordering() {
    let mut config = small_corpus_config();
    config.aggregate.top_words = 5;
    let report = engine(config).run(&sample_corpus());

    let rows = &report.tables.word_frequency;
    assert!(rows.len() <= 5);
    for pair in rows.windows(2) {
        let ordered = pair[0].count > pair[1].count
            || (pair[0].count == pair[1].count && pair[0].word < pair[1].word);
        assert!(ordered, "bad ordering: {pair:?}");
    }
}

#[test]
fn contingency_row_sums_count_axis_instances() {
    let corpus = sample_corpus();
    let report = engine(small_corpus_config()).run(&corpus);

    for label in SentimentLabel::ALL {
        let row_sum: usize = report
            .tables
            .sentiment_by_theme
            .iter()
            .filter(|c| c.label == label)
            .map(|c| c.count)
            .sum();
        let instances: usize = report
            .themes
            .values()
            .filter(|t| report.sentiments[&t.review_id].label == label)
            .map(|t| t.matches.len())
            .sum();
        assert_eq!(row_sum, instances, "label {label}");
    }
}

#[test]
fn report_survives_json_round_trip() {
    use resenha_engine::AnalysisReport;

    let report = engine(small_corpus_config()).run(&sample_corpus());
    let json = serde_json::to_string(&report).unwrap();
    let restored: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.tables.render_all(), report.tables.render_all());
    assert_eq!(restored.diagnostics.len(), report.diagnostics.len());
}

#[test]
fn invalid_configuration_fails_construction() {
    let mut config = AnalysisConfig::default();
    config.themes.taxonomy.axes[0].keywords.clear();
    let err = AnalysisEngine::new(config).unwrap_err();
    assert!(matches!(err, ResenhaError::Config(_)));
}

#[test]
fn empty_corpus_produces_empty_tables_and_a_topic_skip() {
    let report = engine(AnalysisConfig::default()).run(&corpus_from(&[]));
    assert!(report.sentiments.is_empty());
    assert!(!report.has_topics());
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.stage == DiagnosticStage::Topics));
    let total: usize = report
        .tables
        .sentiment_distribution
        .iter()
        .map(|r| r.count)
        .sum();
    assert_eq!(total, 0);
}
