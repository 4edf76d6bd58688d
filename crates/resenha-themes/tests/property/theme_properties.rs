use std::collections::HashSet;

use proptest::prelude::*;
use resenha_core::config::{Taxonomy, ThemeConfig};
use resenha_themes::{classify, ThemeClassifier};

proptest! {
    // Matched axes are always a subset of the configured taxonomy.
    #[test]
    fn matches_are_subset_of_taxonomy(
        words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..50),
    ) {
        let taxonomy = Taxonomy::default_ptbr();
        let configured: HashSet<&str> = taxonomy.axis_ids().collect();
        let result = classify("r", &words, &taxonomy, 1);
        for m in &result.matches {
            prop_assert!(configured.contains(m.axis_id.as_str()));
        }
    }

    #[test]
    fn classification_is_deterministic(
        words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..50),
    ) {
        let classifier = ThemeClassifier::new(&ThemeConfig::default());
        let a = classifier.classify("r", &words);
        let b = classifier.classify("r", &words);
        prop_assert_eq!(a.matches, b.matches);
    }

    // Every retained match clears the threshold, and ranking is
    // score desc / axis id asc.
    #[test]
    fn matches_clear_threshold_and_are_ranked(
        words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..50),
        min_matches in 1usize..4,
    ) {
        let taxonomy = Taxonomy::default_ptbr();
        let result = classify("r", &words, &taxonomy, min_matches);
        for m in &result.matches {
            prop_assert!(m.score >= min_matches);
        }
        for pair in result.matches.windows(2) {
            let ordered = pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].axis_id < pair[1].axis_id);
            prop_assert!(ordered, "bad ranking: {:?}", pair);
        }
    }

    // Raising the threshold never adds axes.
    #[test]
    fn raising_min_matches_is_monotone(
        words in proptest::collection::vec("[a-zá-ú]{1,12}", 0..50),
    ) {
        let taxonomy = Taxonomy::default_ptbr();
        let lenient: HashSet<String> = classify("r", &words, &taxonomy, 1)
            .matches.into_iter().map(|m| m.axis_id).collect();
        let strict: HashSet<String> = classify("r", &words, &taxonomy, 2)
            .matches.into_iter().map(|m| m.axis_id).collect();
        prop_assert!(strict.is_subset(&lenient));
    }
}
