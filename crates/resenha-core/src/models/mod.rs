//! Data model: the review corpus and every per-review analysis result.

mod diagnostic;
mod review;
mod sentiment;
mod theme;
mod topic;

pub use diagnostic::{Diagnostic, DiagnosticStage, Severity};
pub use review::{Corpus, Review, UserHash};
pub use sentiment::{SentimentLabel, SentimentResult};
pub use theme::{AxisMatch, ThemeClassification};
pub use topic::{DocumentTopicWeights, Topic, TopicKeyword};

/// Ordered sequence of normalized tokens derived from one review.
/// Recomputed per run, never persisted.
pub type TokenSequence = Vec<String>;
