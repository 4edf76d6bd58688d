use proptest::prelude::*;
use resenha_core::config::TokenizerConfig;
use resenha_text::{normalize, stopwords, Tokenizer};

proptest! {
    #[test]
    fn tokenization_never_panics(s in ".*") {
        let tokenizer = Tokenizer::default();
        let _ = tokenizer.tokenize(&s);
    }

    #[test]
    fn tokens_meet_minimum_length(s in ".{0,300}") {
        let tokenizer = Tokenizer::default();
        for token in tokenizer.tokenize(&s) {
            prop_assert!(token.chars().count() >= 2, "short token {token:?}");
        }
    }

    #[test]
    fn tokens_are_lowercase_letters(s in ".{0,300}") {
        let tokenizer = Tokenizer::default();
        for token in tokenizer.tokenize(&s) {
            prop_assert!(
                !token.chars().any(|c| c.is_uppercase() || c.is_ascii_digit()),
                "unnormalized token {token:?}"
            );
        }
    }

    #[test]
    fn no_stopwords_survive(s in "[a-zá-ú ]{0,300}") {
        let tokenizer = Tokenizer::default();
        for token in tokenizer.tokenize(&s) {
            prop_assert!(!stopwords::is_stopword(&token));
        }
    }

    #[test]
    fn tokenization_is_deterministic(s in ".{0,300}") {
        let tokenizer = Tokenizer::default();
        prop_assert_eq!(tokenizer.tokenize(&s), tokenizer.tokenize(&s));
    }

    #[test]
    fn normalization_is_idempotent(s in ".{0,300}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    #[test]
    fn min_len_zero_keeps_single_letters(s in "[a-z ]{0,100}") {
        let config = TokenizerConfig { min_token_len: 0, ..Default::default() };
        let tokenizer = Tokenizer::new(&config);
        let expected: Vec<String> = s
            .split_whitespace()
            .filter(|w| !stopwords::is_stopword(w))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(tokenizer.tokenize(&s), expected);
    }
}
