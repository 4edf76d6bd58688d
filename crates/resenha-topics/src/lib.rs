//! # resenha-topics
//!
//! Fixed-K latent topic model over the tokenized corpus. One blocking
//! call per run: vocabulary pruning, document-term counts, seeded
//! iterative fit. The seed and iteration count are exposed on the
//! fitted model for reproducibility. A degenerate corpus is a declared
//! failure, never a silent empty result.

pub mod builder;
pub mod model;
pub mod vocabulary;

pub use builder::TopicModelBuilder;
pub use model::FittedTopicModel;
pub use vocabulary::{DocumentTermMatrix, Vocabulary};
