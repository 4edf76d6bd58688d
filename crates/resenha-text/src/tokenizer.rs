//! The tokenizer: normalization, stopword removal, minimum length.

use std::collections::HashSet;

use resenha_core::config::TokenizerConfig;
use resenha_core::models::TokenSequence;

use crate::normalizer::{fold_diacritics, normalize};
use crate::stopwords;

/// Turns raw review text into a cleaned token sequence. Construct once,
/// share read-only across workers.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_len: usize,
    fold_diacritics: bool,
    extra_stopwords: HashSet<String>,
}

impl Tokenizer {
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            min_token_len: config.min_token_len,
            fold_diacritics: config.fold_diacritics,
            extra_stopwords: config.extra_stopwords.iter().cloned().collect(),
        }
    }

    /// Tokenize raw text. Empty or whitespace-only input yields an empty
    /// sequence; downstream components treat that as neutral/unmatched.
    pub fn tokenize(&self, raw: &str) -> TokenSequence {
        normalize(raw)
            .split_whitespace()
            .filter(|w| w.chars().count() >= self.min_token_len)
            .filter(|w| !stopwords::is_stopword(w) && !self.extra_stopwords.contains(*w))
            .map(|w| {
                if self.fold_diacritics {
                    fold_diacritics(w)
                } else {
                    w.to_string()
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}
