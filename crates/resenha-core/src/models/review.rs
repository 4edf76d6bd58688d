use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anonymized user identifier: blake3 hex digest of the raw user name.
/// The raw name is never stored; this is the only constructor from one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHash(String);

impl UserHash {
    /// Hash a raw user name into an anonymized identifier.
    pub fn anonymize(user_name: &str) -> Self {
        Self(blake3::hash(user_name.as_bytes()).to_hex().to_string())
    }

    /// Wrap an already-anonymized identifier (e.g. read back from disk).
    pub fn from_digest(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One collected app review. Immutable once collected; the engine never
/// mutates a review during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub app_id: String,
    /// Raw review text, possibly empty.
    pub text: String,
    /// Store rating, 1–5. Missing ratings are an input defect handled
    /// locally, never an error.
    pub rating: Option<u8>,
    pub date: DateTime<Utc>,
    pub user_hash: UserHash,
}

/// The full set of reviews analyzed in one run. Insertion order is
/// preserved for reproducible output; analysis order is canonicalized
/// by `review_id` downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    reviews: Vec<Review>,
}

impl Corpus {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.reviews.iter()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

impl FromIterator<Review> for Corpus {
    fn from_iter<T: IntoIterator<Item = Review>>(iter: T) -> Self {
        Self {
            reviews: iter.into_iter().collect(),
        }
    }
}
