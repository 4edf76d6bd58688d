//! # resenha-sentiment
//!
//! Lexicon-based sentiment scoring. Fully deterministic: no learned
//! parameters, results are reproducible given a fixed lexicon version.

pub mod lexicon;
pub mod scorer;

pub use lexicon::Lexicon;
pub use scorer::SentimentScorer;
