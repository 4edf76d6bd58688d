use serde::{Deserialize, Serialize};

use super::defaults;

/// Tokenizer & normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Tokens shorter than this are discarded.
    pub min_token_len: usize,
    /// Fold diacritics before matching (á → a). Off by default: the
    /// embedded lexicon and taxonomy carry accented forms.
    pub fold_diacritics: bool,
    /// Stopwords added on top of the embedded Portuguese list.
    pub extra_stopwords: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: defaults::DEFAULT_MIN_TOKEN_LEN,
            fold_diacritics: false,
            extra_stopwords: Vec::new(),
        }
    }
}
