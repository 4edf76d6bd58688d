use serde::{Deserialize, Serialize};

/// Discrete sentiment label. Display renders the Portuguese study labels
/// used in the aggregate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// All labels in canonical table order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SentimentLabel::Negative => "Negativo",
            SentimentLabel::Neutral => "Neutro",
            SentimentLabel::Positive => "Positivo",
        };
        f.write_str(s)
    }
}

/// Sentiment of one review. Deterministic function of its token sequence
/// and the scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub review_id: String,
    /// Signed intensity in [-1, 1].
    pub polarity: f64,
    pub label: SentimentLabel,
}

impl SentimentResult {
    /// The result produced for a review with no scorable tokens.
    pub fn neutral(review_id: impl Into<String>) -> Self {
        Self {
            review_id: review_id.into(),
            polarity: 0.0,
            label: SentimentLabel::Neutral,
        }
    }
}
