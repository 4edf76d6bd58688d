use serde::{Deserialize, Serialize};

/// One ranked keyword of a latent topic. Weights are normalized within
/// the topic's word distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicKeyword {
    pub word: String,
    pub weight: f64,
}

/// One latent topic discovered over the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// 0..K-1.
    pub topic_id: usize,
    /// Ranked by weight descending, then word ascending.
    pub top_keywords: Vec<TopicKeyword>,
}

/// Per-review probabilistic topic membership. `weights[k]` is the
/// probability of topic `k`; the vector always sums to 1 within
/// `constants::TOPIC_WEIGHT_TOLERANCE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTopicWeights {
    pub review_id: String,
    pub weights: Vec<f64>,
}

impl DocumentTopicWeights {
    /// Index of the strongest topic (ties resolve to the lowest id).
    pub fn dominant_topic(&self) -> Option<usize> {
        self.weights
            .iter()
            .enumerate()
            .max_by(|(ai, a), (bi, b)| {
                a.partial_cmp(b)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(bi.cmp(ai))
            })
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_topic_prefers_lowest_id_on_tie() {
        let w = DocumentTopicWeights {
            review_id: "r1".into(),
            weights: vec![0.4, 0.4, 0.2],
        };
        assert_eq!(w.dominant_topic(), Some(0));
    }

    #[test]
    fn dominant_topic_empty_weights() {
        let w = DocumentTopicWeights {
            review_id: "r1".into(),
            weights: vec![],
        };
        assert_eq!(w.dominant_topic(), None);
    }
}
