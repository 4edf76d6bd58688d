//! The aggregator: canonicalized, deterministic rollups.

use std::collections::{BTreeMap, HashMap};

use resenha_core::config::{AggregateConfig, Taxonomy};
use resenha_core::models::{
    Review, SentimentLabel, SentimentResult, ThemeClassification, TokenSequence, Topic,
};

use crate::tables::{
    AggregateTables, AnnotatedReviewRow, ContingencyRow, SentimentDistributionRow,
    ThemeDistributionRow, TopicKeywordsRow, WordFrequencyRow, UNCLASSIFIED_AXIS,
};

/// Everything the aggregator needs about one review. Per-review results
/// are computed upstream; this component performs no new classification.
#[derive(Debug, Clone, Copy)]
pub struct ReviewRecord<'a> {
    pub review: &'a Review,
    pub tokens: &'a TokenSequence,
    pub sentiment: &'a SentimentResult,
    pub themes: &'a ThemeClassification,
}

/// Builds the aggregate tables. Pure and idempotent: re-running over
/// the same inputs yields byte-identical tables.
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AggregateConfig,
    taxonomy: Taxonomy,
}

impl Aggregator {
    pub fn new(config: &AggregateConfig, taxonomy: &Taxonomy) -> Self {
        Self {
            config: config.clone(),
            taxonomy: taxonomy.clone(),
        }
    }

    /// Aggregate per-review results. `topics` is `None` when the topic
    /// fit was skipped; the topic table is then omitted rather than the
    /// whole aggregation failing.
    pub fn aggregate(
        &self,
        records: &[ReviewRecord<'_>],
        topics: Option<&[Topic]>,
    ) -> AggregateTables {
        // Canonicalize: parallel workers deliver results in arbitrary
        // order, tables must not depend on it.
        let mut records: Vec<ReviewRecord<'_>> = records.to_vec();
        records.sort_by(|a, b| a.review.review_id.cmp(&b.review.review_id));

        AggregateTables {
            word_frequency: self.word_frequency(records.iter().map(|r| r.tokens)),
            word_frequency_by_sentiment: self.split_word_frequency(&records),
            sentiment_distribution: self.sentiment_distribution(&records),
            theme_distribution: self.theme_distribution(&records),
            sentiment_by_theme: self.contingency(&records),
            topic_keywords: topics.map(topic_keywords),
            annotated_reviews: records.iter().map(annotate).collect(),
        }
    }

    /// Top-N token counts, count descending, ties lexicographic
    /// ascending.
    fn word_frequency<'a, I>(&self, token_sets: I) -> Vec<WordFrequencyRow>
    where
        I: Iterator<Item = &'a TokenSequence>,
    {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tokens in token_sets {
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }
        let mut rows: Vec<(&str, usize)> = counts.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        rows.truncate(self.config.top_words);
        rows.into_iter()
            .map(|(word, count)| WordFrequencyRow {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    fn split_word_frequency(
        &self,
        records: &[ReviewRecord<'_>],
    ) -> Option<BTreeMap<SentimentLabel, Vec<WordFrequencyRow>>> {
        if !self.config.split_word_frequency_by_sentiment {
            return None;
        }
        let mut split = BTreeMap::new();
        for label in SentimentLabel::ALL {
            let rows = self.word_frequency(
                records
                    .iter()
                    .filter(|r| r.sentiment.label == label)
                    .map(|r| r.tokens),
            );
            split.insert(label, rows);
        }
        Some(split)
    }

    /// Counts sum exactly to the corpus size.
    fn sentiment_distribution(&self, records: &[ReviewRecord<'_>]) -> Vec<SentimentDistributionRow> {
        let total = records.len();
        SentimentLabel::ALL
            .iter()
            .map(|&label| {
                let count = records.iter().filter(|r| r.sentiment.label == label).count();
                SentimentDistributionRow {
                    label,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect()
    }

    /// Per-axis counts in taxonomy order, with a trailing unclassified
    /// row. Percentages are of the review count.
    fn theme_distribution(&self, records: &[ReviewRecord<'_>]) -> Vec<ThemeDistributionRow> {
        let total = records.len();
        let mut rows: Vec<ThemeDistributionRow> = self
            .taxonomy
            .axes
            .iter()
            .map(|axis| {
                let count = records
                    .iter()
                    .filter(|r| r.themes.axis_ids().any(|id| id == axis.axis_id))
                    .count();
                ThemeDistributionRow {
                    axis_id: axis.axis_id.clone(),
                    display_name: axis.display_name.clone(),
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        let unclassified = records.iter().filter(|r| r.themes.is_unclassified()).count();
        rows.push(ThemeDistributionRow {
            axis_id: UNCLASSIFIED_AXIS.to_string(),
            display_name: "Não classificado".to_string(),
            count: unclassified,
            percentage: percentage(unclassified, total),
        });
        rows
    }

    /// Full label × axis grid in canonical order, zero cells included.
    /// Row sums per label equal that label's matched-axis instances,
    /// not its review count.
    fn contingency(&self, records: &[ReviewRecord<'_>]) -> Vec<ContingencyRow> {
        let mut cells: BTreeMap<(SentimentLabel, &str), usize> = BTreeMap::new();
        for label in SentimentLabel::ALL {
            for axis in &self.taxonomy.axes {
                cells.insert((label, axis.axis_id.as_str()), 0);
            }
        }
        for record in records {
            for axis_id in record.themes.axis_ids() {
                if let Some(cell) = cells.get_mut(&(record.sentiment.label, axis_id)) {
                    *cell += 1;
                }
            }
        }
        cells
            .into_iter()
            .map(|((label, axis_id), count)| ContingencyRow {
                label,
                axis_id: axis_id.to_string(),
                count,
            })
            .collect()
    }
}

fn topic_keywords(topics: &[Topic]) -> Vec<TopicKeywordsRow> {
    topics
        .iter()
        .map(|topic| TopicKeywordsRow {
            topic_id: topic.topic_id,
            keywords: topic
                .top_keywords
                .iter()
                .map(|k| k.word.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn annotate(record: &ReviewRecord<'_>) -> AnnotatedReviewRow {
    let axes = if record.themes.is_unclassified() {
        UNCLASSIFIED_AXIS.to_string()
    } else {
        record
            .themes
            .axis_ids()
            .collect::<Vec<_>>()
            .join("; ")
    };
    AnnotatedReviewRow {
        review_id: record.review.review_id.clone(),
        app_id: record.review.app_id.clone(),
        rating: record.review.rating,
        label: record.sentiment.label,
        polarity: record.sentiment.polarity,
        axes,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
