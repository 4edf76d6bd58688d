use proptest::prelude::*;
use resenha_core::config::SentimentConfig;
use resenha_core::models::SentimentLabel;
use resenha_sentiment::{Lexicon, SentimentScorer};

fn scorer_with_thresholds(pos: f64, neg: f64) -> SentimentScorer {
    SentimentScorer::new(
        Lexicon::embedded(),
        &SentimentConfig {
            positive_threshold: pos,
            negative_threshold: neg,
            ..Default::default()
        },
    )
}

proptest! {
    #[test]
    fn polarity_always_in_range(words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..40)) {
        let scorer = scorer_with_thresholds(0.1, 0.1);
        let polarity = scorer.polarity(&words);
        prop_assert!((-1.0..=1.0).contains(&polarity));
    }

    #[test]
    fn scoring_is_deterministic(words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..40)) {
        let scorer = scorer_with_thresholds(0.1, 0.1);
        let a = scorer.score("r", &words);
        let b = scorer.score("r", &words);
        prop_assert_eq!(a.polarity, b.polarity);
        prop_assert_eq!(a.label, b.label);
    }

    // Raising the positive threshold never increases the positive count.
    #[test]
    fn raising_positive_threshold_is_monotone(
        corpus in proptest::collection::vec(
            proptest::collection::vec("[a-zá-ú]{1,12}", 0..20),
            1..30,
        ),
        low in 0.01f64..0.5,
        delta in 0.0f64..0.5,
    ) {
        let lenient = scorer_with_thresholds(low, 0.1);
        let strict = scorer_with_thresholds(low + delta, 0.1);

        let count = |s: &SentimentScorer| {
            corpus
                .iter()
                .filter(|doc| s.score("r", doc).label == SentimentLabel::Positive)
                .count()
        };
        prop_assert!(count(&strict) <= count(&lenient));
    }

    #[test]
    fn label_matches_polarity_and_thresholds(
        words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..40),
        pos in 0.01f64..0.9,
        neg in 0.01f64..0.9,
    ) {
        let scorer = scorer_with_thresholds(pos, neg);
        let result = scorer.score("r", &words);
        let expected = if result.polarity > pos {
            SentimentLabel::Positive
        } else if result.polarity < -neg {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(result.label, expected);
    }
}
