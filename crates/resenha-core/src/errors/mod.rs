//! Error taxonomy for the engine.
//!
//! Configuration and lexicon defects are fatal at construction time;
//! topic-model defects are recoverable and degrade to a skipped topic
//! analysis. Input defects (empty text, missing rating) never surface
//! here; the components handle them locally.

mod config_error;
mod lexicon_error;
mod topic_error;

pub use config_error::ConfigError;
pub use lexicon_error::LexiconError;
pub use topic_error::TopicError;

/// Umbrella error for the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum ResenhaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Topic(#[from] TopicError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across all crates.
pub type ResenhaResult<T> = Result<T, ResenhaError>;
