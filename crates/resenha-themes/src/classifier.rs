//! The classifier: a pure function from token sequence and taxonomy to
//! ranked axis matches.

use resenha_core::config::{Taxonomy, ThemeConfig, ThematicAxis};
use resenha_core::models::{AxisMatch, ThemeClassification, TokenSequence};

/// A keyword stem matches a token when the token equals or extends it:
/// "sincroniz" matches "sincronizar" and "sincronização".
fn stem_matches(keyword: &str, token: &str) -> bool {
    token.starts_with(keyword)
}

/// A phrase keyword ("não carrega") matches a consecutive token window,
/// each word by the stem rule.
fn phrase_matches(words: &[&str], window: &[String]) -> bool {
    words.len() == window.len()
        && words
            .iter()
            .zip(window.iter())
            .all(|(kw, token)| stem_matches(kw, token))
}

/// Match score of one axis over a token sequence: the number of token
/// positions matching a single-word keyword plus the number of windows
/// matching a phrase keyword. Each position/window counts once per axis
/// no matter how many keywords hit it.
fn axis_score(axis: &ThematicAxis, tokens: &TokenSequence) -> usize {
    let mut stems: Vec<&str> = Vec::new();
    let mut phrases: Vec<Vec<&str>> = Vec::new();
    for keyword in &axis.keywords {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        match words.len() {
            0 => {}
            1 => stems.push(words[0]),
            _ => phrases.push(words),
        }
    }

    let single_hits = tokens
        .iter()
        .filter(|token| stems.iter().any(|kw| stem_matches(kw, token)))
        .count();

    let mut phrase_hits = 0usize;
    for phrase in &phrases {
        if phrase.len() > tokens.len() {
            continue;
        }
        phrase_hits += tokens
            .windows(phrase.len())
            .filter(|window| phrase_matches(phrase, window))
            .count();
    }

    single_hits + phrase_hits
}

/// Classify one token sequence against the taxonomy. Pure: no shared
/// mutable state, trivially parallelizable. All axes clearing
/// `min_matches` are retained, ranked by score descending then axis id
/// ascending for reporting.
pub fn classify(
    review_id: &str,
    tokens: &TokenSequence,
    taxonomy: &Taxonomy,
    min_matches: usize,
) -> ThemeClassification {
    // min_matches of 0 would match every axis on every review.
    let threshold = min_matches.max(1);

    let mut matches: Vec<AxisMatch> = taxonomy
        .axes
        .iter()
        .filter_map(|axis| {
            let score = axis_score(axis, tokens);
            (score >= threshold).then(|| AxisMatch {
                axis_id: axis.axis_id.clone(),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.axis_id.cmp(&b.axis_id)));

    ThemeClassification {
        review_id: review_id.to_string(),
        matches,
    }
}

/// Convenience wrapper binding a taxonomy and threshold, shared
/// read-only across workers.
#[derive(Debug, Clone)]
pub struct ThemeClassifier {
    taxonomy: Taxonomy,
    min_matches: usize,
}

impl ThemeClassifier {
    pub fn new(config: &ThemeConfig) -> Self {
        Self {
            taxonomy: config.taxonomy.clone(),
            min_matches: config.min_matches,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn classify(&self, review_id: &str, tokens: &TokenSequence) -> ThemeClassification {
        classify(review_id, tokens, &self.taxonomy, self.min_matches)
    }
}
