//! # resenha-text
//!
//! Tokenizer & normalizer for Portuguese review text.
//! Raw string in, cleaned token sequence out. Empty or whitespace-only
//! input yields an empty sequence, never an error.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::normalize;
pub use tokenizer::Tokenizer;
