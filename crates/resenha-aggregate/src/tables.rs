//! Tabular output structures: rows of named fields suitable for
//! delimited serialization and report embedding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use resenha_core::constants::TABLE_DELIMITER;
use resenha_core::models::SentimentLabel;

/// Axis id used for the reviews matching no thematic axis.
pub const UNCLASSIFIED_AXIS: &str = "unclassified";

/// A row type that can render itself into a delimited table.
pub trait TableRow {
    fn header() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

/// Render rows as a delimited table with a header line. Field
/// formatting is fixed so identical inputs render byte-identically.
pub fn render_delimited<R: TableRow>(rows: &[R]) -> String {
    let mut out = String::new();
    out.push_str(&R::header().join(&TABLE_DELIMITER.to_string()));
    out.push('\n');
    for row in rows {
        out.push_str(&row.fields().join(&TABLE_DELIMITER.to_string()));
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyRow {
    pub word: String,
    pub count: usize,
}

impl TableRow for WordFrequencyRow {
    fn header() -> &'static [&'static str] {
        &["word", "count"]
    }

    fn fields(&self) -> Vec<String> {
        vec![self.word.clone(), self.count.to_string()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentDistributionRow {
    pub label: SentimentLabel,
    pub count: usize,
    /// Of the corpus size, in percent.
    pub percentage: f64,
}

impl TableRow for SentimentDistributionRow {
    fn header() -> &'static [&'static str] {
        &["sentiment", "count", "percentage"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.label.to_string(),
            self.count.to_string(),
            format!("{:.1}", self.percentage),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeDistributionRow {
    pub axis_id: String,
    pub display_name: String,
    pub count: usize,
    /// Of the review count; multi-label, so the column may sum past 100.
    pub percentage: f64,
}

impl TableRow for ThemeDistributionRow {
    fn header() -> &'static [&'static str] {
        &["axis", "display_name", "count", "percentage"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.axis_id.clone(),
            self.display_name.clone(),
            self.count.to_string(),
            format!("{:.1}", self.percentage),
        ]
    }
}

/// One cell of the sentiment × theme contingency table. A review with
/// two matched axes contributes to two cells of its sentiment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyRow {
    pub label: SentimentLabel,
    pub axis_id: String,
    pub count: usize,
}

impl TableRow for ContingencyRow {
    fn header() -> &'static [&'static str] {
        &["sentiment", "axis", "count"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.label.to_string(),
            self.axis_id.clone(),
            self.count.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicKeywordsRow {
    pub topic_id: usize,
    /// Ranked keywords joined by ", ".
    pub keywords: String,
}

impl TableRow for TopicKeywordsRow {
    fn header() -> &'static [&'static str] {
        &["topic", "keywords"]
    }

    fn fields(&self) -> Vec<String> {
        vec![format!("Tópico {}", self.topic_id + 1), self.keywords.clone()]
    }
}

/// One annotated review: the per-review results flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedReviewRow {
    pub review_id: String,
    pub app_id: String,
    pub rating: Option<u8>,
    pub label: SentimentLabel,
    pub polarity: f64,
    /// Matched axis ids joined by "; ", or the unclassified marker.
    pub axes: String,
}

impl TableRow for AnnotatedReviewRow {
    fn header() -> &'static [&'static str] {
        &["review_id", "app_id", "rating", "sentiment", "polarity", "axes"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.review_id.clone(),
            self.app_id.clone(),
            self.rating.map(|r| r.to_string()).unwrap_or_default(),
            self.label.to_string(),
            format!("{:.4}", self.polarity),
            self.axes.clone(),
        ]
    }
}

/// The four aggregate views plus the recovered exports. Purely derived:
/// recomputed from upstream results, never mutated in place. Topic
/// tables are absent when the topic fit was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateTables {
    pub word_frequency: Vec<WordFrequencyRow>,
    /// Present when configured; keyed by label for deterministic order.
    pub word_frequency_by_sentiment: Option<BTreeMap<SentimentLabel, Vec<WordFrequencyRow>>>,
    pub sentiment_distribution: Vec<SentimentDistributionRow>,
    pub theme_distribution: Vec<ThemeDistributionRow>,
    pub sentiment_by_theme: Vec<ContingencyRow>,
    pub topic_keywords: Option<Vec<TopicKeywordsRow>>,
    pub annotated_reviews: Vec<AnnotatedReviewRow>,
}

impl AggregateTables {
    /// Render every table into one delimited document, section per
    /// table. Byte-identical for identical inputs.
    pub fn render_all(&self) -> String {
        let mut out = String::new();
        out.push_str("# word_frequency\n");
        out.push_str(&render_delimited(&self.word_frequency));
        if let Some(split) = &self.word_frequency_by_sentiment {
            for (label, rows) in split {
                out.push_str(&format!("# word_frequency[{label}]\n"));
                out.push_str(&render_delimited(rows));
            }
        }
        out.push_str("# sentiment_distribution\n");
        out.push_str(&render_delimited(&self.sentiment_distribution));
        out.push_str("# theme_distribution\n");
        out.push_str(&render_delimited(&self.theme_distribution));
        out.push_str("# sentiment_by_theme\n");
        out.push_str(&render_delimited(&self.sentiment_by_theme));
        if let Some(topics) = &self.topic_keywords {
            out.push_str("# topic_keywords\n");
            out.push_str(&render_delimited(topics));
        }
        out.push_str("# annotated_reviews\n");
        out.push_str(&render_delimited(&self.annotated_reviews));
        out
    }
}
