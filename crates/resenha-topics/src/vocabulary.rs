//! Pruned vocabulary and sparse document-term counts.

use std::collections::HashMap;

use resenha_core::config::TopicConfig;
use resenha_core::models::TokenSequence;

/// The pruned vocabulary: terms in alphabetical order for determinism,
/// with an index for lookups.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from the tokenized corpus, applying the configured pruning
    /// bounds: document frequency below `min_doc_freq` or above
    /// `max_doc_ratio` drops a term; the `max_features` cap keeps the
    /// most frequent terms (ties broken alphabetically).
    pub fn build(docs: &[TokenSequence], config: &TopicConfig) -> Self {
        let n_docs = docs.len();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();

        for tokens in docs {
            let mut seen: Vec<&str> = Vec::new();
            for token in tokens {
                *corpus_freq.entry(token.as_str()).or_insert(0) += 1;
                if !seen.contains(&token.as_str()) {
                    seen.push(token.as_str());
                    *doc_freq.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        let max_df = (config.max_doc_ratio * n_docs as f64).floor() as usize;
        let mut kept: Vec<(&str, usize)> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= config.min_doc_freq && df <= max_df.max(1))
            .map(|(&term, _)| (term, corpus_freq[term]))
            .collect();

        // Cap by descending corpus frequency, ties alphabetical.
        kept.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        kept.truncate(config.max_features);

        let mut terms: Vec<String> = kept.into_iter().map(|(t, _)| t.to_string()).collect();
        terms.sort_unstable();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, idx: usize) -> &str {
        &self.terms[idx]
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }
}

/// Sparse per-document term counts over a pruned vocabulary.
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    vocabulary: Vocabulary,
    /// One row per document: (term index, count), term index ascending.
    rows: Vec<Vec<(usize, usize)>>,
}

impl DocumentTermMatrix {
    pub fn build(docs: &[TokenSequence], config: &TopicConfig) -> Self {
        let vocabulary = Vocabulary::build(docs, config);
        let rows = docs
            .iter()
            .map(|tokens| {
                let mut counts: HashMap<usize, usize> = HashMap::new();
                for token in tokens {
                    if let Some(idx) = vocabulary.index_of(token) {
                        *counts.entry(idx).or_insert(0) += 1;
                    }
                }
                let mut row: Vec<(usize, usize)> = counts.into_iter().collect();
                row.sort_unstable_by_key(|&(idx, _)| idx);
                row
            })
            .collect();
        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, doc: usize) -> &[(usize, usize)] {
        &self.rows[doc]
    }
}
