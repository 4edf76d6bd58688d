//! The LDA model: seeded EM-style fit over the document-term matrix.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use resenha_core::errors::TopicError;
use resenha_core::models::{DocumentTopicWeights, Topic, TopicKeyword};

use crate::vocabulary::DocumentTermMatrix;

/// A fitted topic model. Carries everything needed to reproduce the
/// fit: the effective topic count (retries may reduce it below the
/// configured K), the seed, and the iterations run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedTopicModel {
    pub topic_count: usize,
    pub seed: u64,
    pub iterations: usize,
    /// One per topic, keywords ranked by weight desc then word asc.
    pub topics: Vec<Topic>,
    /// One per document, in input order; each sums to 1 within
    /// tolerance.
    pub doc_weights: Vec<DocumentTopicWeights>,
}

/// Fit LDA with `k` topics over the matrix. Deterministic for a fixed
/// seed: initialization uses a seeded RNG and the update loop is
/// sequential.
///
/// Fails on an empty corpus or when the pruned vocabulary has fewer
/// terms than topics; the caller decides whether to retry with a
/// reduced K.
pub fn fit(
    dtm: &DocumentTermMatrix,
    review_ids: &[String],
    k: usize,
    iterations: usize,
    top_keywords: usize,
    seed: u64,
) -> Result<FittedTopicModel, TopicError> {
    let n_docs = dtm.n_docs();
    let n_terms = dtm.vocabulary().len();

    if n_docs == 0 {
        return Err(TopicError::EmptyCorpus);
    }
    if n_terms < k {
        return Err(TopicError::DegenerateVocabulary {
            vocab_size: n_terms,
            topic_count: k,
        });
    }
    debug_assert_eq!(review_ids.len(), n_docs);

    let mut rng = StdRng::seed_from_u64(seed);

    // Uniform initialization with small seeded noise, rows normalized.
    let mut doc_topic = vec![0.0f64; n_docs * k];
    let mut topic_word = vec![0.0f64; k * n_terms];
    let doc_init = 1.0 / k as f64;
    let word_init = 1.0 / n_terms as f64;
    for v in doc_topic.iter_mut() {
        *v = doc_init + rng.gen::<f64>() * 0.01;
    }
    for v in topic_word.iter_mut() {
        *v = word_init + rng.gen::<f64>() * 0.01;
    }
    normalize_rows(&mut doc_topic, n_docs, k);
    normalize_rows(&mut topic_word, k, n_terms);

    // EM-style updates: expected topic assignments per (doc, term),
    // then row renormalization.
    let mut topic_probs = vec![0.0f64; k];
    for _ in 0..iterations {
        let mut new_doc_topic = vec![0.0f64; n_docs * k];
        let mut new_topic_word = vec![0.0f64; k * n_terms];

        for d in 0..n_docs {
            for &(term, count) in dtm.row(d) {
                let count = count as f64;
                let mut sum = 0.0;
                for t in 0..k {
                    let p = doc_topic[d * k + t] * topic_word[t * n_terms + term];
                    topic_probs[t] = p;
                    sum += p;
                }
                if sum <= 1e-12 {
                    continue;
                }
                for t in 0..k {
                    let p = topic_probs[t] / sum;
                    new_doc_topic[d * k + t] += count * p;
                    new_topic_word[t * n_terms + term] += count * p;
                }
            }
        }

        normalize_rows(&mut new_doc_topic, n_docs, k);
        normalize_rows(&mut new_topic_word, k, n_terms);
        doc_topic = new_doc_topic;
        topic_word = new_topic_word;
    }

    // Documents with no in-vocabulary tokens have an all-zero row after
    // the updates; they get the uniform distribution so every weight
    // vector stays on the simplex.
    for d in 0..n_docs {
        let row = &mut doc_topic[d * k..(d + 1) * k];
        let sum: f64 = row.iter().sum();
        if sum <= 1e-12 {
            row.fill(1.0 / k as f64);
        } else {
            for v in row.iter_mut() {
                *v /= sum;
            }
        }
    }

    let topics = extract_topics(&topic_word, dtm, k, top_keywords);
    let doc_weights = review_ids
        .iter()
        .enumerate()
        .map(|(d, id)| DocumentTopicWeights {
            review_id: id.clone(),
            weights: doc_topic[d * k..(d + 1) * k].to_vec(),
        })
        .collect();

    Ok(FittedTopicModel {
        topic_count: k,
        seed,
        iterations,
        topics,
        doc_weights,
    })
}

fn extract_topics(
    topic_word: &[f64],
    dtm: &DocumentTermMatrix,
    k: usize,
    top_keywords: usize,
) -> Vec<Topic> {
    let n_terms = dtm.vocabulary().len();
    (0..k)
        .map(|t| {
            let mut ranked: Vec<(usize, f64)> = (0..n_terms)
                .map(|term| (term, topic_word[t * n_terms + term]))
                .collect();
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| dtm.vocabulary().term(a.0).cmp(dtm.vocabulary().term(b.0)))
            });
            ranked.truncate(top_keywords);
            Topic {
                topic_id: t,
                top_keywords: ranked
                    .into_iter()
                    .map(|(term, weight)| TopicKeyword {
                        word: dtm.vocabulary().term(term).to_string(),
                        weight,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Normalize each row to sum to 1; all-zero rows are left untouched.
fn normalize_rows(data: &mut [f64], n_rows: usize, n_cols: usize) {
    for r in 0..n_rows {
        let row = &mut data[r * n_cols..(r + 1) * n_cols];
        let sum: f64 = row.iter().sum();
        if sum > 1e-12 {
            for v in row.iter_mut() {
                *v /= sum;
            }
        }
    }
}
