//! # resenha-core
//!
//! Foundation crate for the Resenha review-analytics engine.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::AnalysisConfig;
pub use errors::{ResenhaError, ResenhaResult};
pub use models::{
    Corpus, Review, SentimentLabel, SentimentResult, ThemeClassification, TokenSequence,
};
