use serde::{Deserialize, Serialize};

/// One matched thematic axis with its match score (number of matched
/// token positions / phrase windows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisMatch {
    pub axis_id: String,
    pub score: usize,
}

/// Multi-label thematic classification of one review. Zero matches means
/// the review is "unclassified": retained and counted separately, never
/// discarded. Matches are ranked by score descending, then axis id
/// ascending, for reporting only; there is no forced single winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeClassification {
    pub review_id: String,
    pub matches: Vec<AxisMatch>,
}

impl ThemeClassification {
    pub fn unclassified(review_id: impl Into<String>) -> Self {
        Self {
            review_id: review_id.into(),
            matches: Vec::new(),
        }
    }

    pub fn is_unclassified(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched axis ids in reporting order.
    pub fn axis_ids(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.axis_id.as_str())
    }
}
