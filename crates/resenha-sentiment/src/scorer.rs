//! The sentiment scorer: length-normalized lexicon average plus
//! threshold labeling.

use resenha_core::config::SentimentConfig;
use resenha_core::constants::{POLARITY_MAX, POLARITY_MIN};
use resenha_core::models::{SentimentLabel, SentimentResult, TokenSequence};

use crate::lexicon::Lexicon;

/// Scores token sequences against a fixed lexicon. Pure and
/// deterministic; shared read-only across parallel workers.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
    positive_threshold: f64,
    negative_threshold: f64,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon, config: &SentimentConfig) -> Self {
        Self {
            lexicon,
            positive_threshold: config.positive_threshold,
            negative_threshold: config.negative_threshold,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Polarity of a token sequence: sum of matched weights divided by
    /// the number of matched tokens, clamped to [-1, 1]. Unrecognized
    /// tokens are silently skipped; no match at all yields 0.
    pub fn polarity(&self, tokens: &TokenSequence) -> f64 {
        let mut sum = 0.0;
        let mut matched = 0usize;
        for token in tokens {
            if let Some(weight) = self.lexicon.weight(token) {
                sum += weight;
                matched += 1;
            }
        }
        if matched == 0 {
            return 0.0;
        }
        (sum / matched as f64).clamp(POLARITY_MIN, POLARITY_MAX)
    }

    /// Map a polarity to its discrete label using the configured
    /// thresholds.
    pub fn label(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.positive_threshold {
            SentimentLabel::Positive
        } else if polarity < -self.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Score one review's token sequence.
    pub fn score(&self, review_id: &str, tokens: &TokenSequence) -> SentimentResult {
        let polarity = self.polarity(tokens);
        SentimentResult {
            review_id: review_id.to_string(),
            polarity,
            label: self.label(polarity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(Lexicon::embedded(), &SentimentConfig::default())
    }

    fn tokens(words: &[&str]) -> TokenSequence {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_sequence_is_neutral_zero() {
        let result = scorer().score("r1", &tokens(&[]));
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn oov_tokens_are_skipped_not_counted() {
        // One matched negative word among unknowns: average over 1.
        let result = scorer().score("r1", &tokens(&["xyzzy", "trava", "qwerty"]));
        assert!(result.polarity < -0.5);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn negative_review_scores_negative() {
        let result = scorer().score("r1", &tokens(&["trava", "direto", "lento"]));
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn positive_review_scores_positive() {
        let result = scorer().score("r1", &tokens(&["excelente", "recomendo"]));
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.polarity > 0.8);
    }

    #[test]
    fn mixed_review_can_be_neutral() {
        // bom (+0.6) and demora (-0.5) average to +0.05, within thresholds.
        let result = scorer().score("r1", &tokens(&["bom", "demora"]));
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn polarity_is_clamped() {
        let result = scorer().score("r1", &tokens(&["lixo", "merda", "odiei"]));
        assert!(result.polarity >= -1.0);
        assert_eq!(result.label, SentimentLabel::Negative);
    }

    #[test]
    fn thresholds_shift_labels() {
        let strict = SentimentScorer::new(
            Lexicon::embedded(),
            &SentimentConfig {
                positive_threshold: 0.7,
                negative_threshold: 0.7,
                ..Default::default()
            },
        );
        // bom alone is +0.6: positive under default, neutral under 0.7.
        assert_eq!(scorer().score("r", &tokens(&["bom"])).label, SentimentLabel::Positive);
        assert_eq!(strict.score("r", &tokens(&["bom"])).label, SentimentLabel::Neutral);
    }
}
