/// Polarity-lexicon defects. Fatal at engine construction: a missing or
/// empty lexicon makes every sentiment result meaningless.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon file not found: {path}")]
    NotFound { path: String },

    #[error("lexicon file {path} is malformed: {reason}")]
    Malformed { path: String, reason: String },

    #[error("lexicon '{version}' contains no entries")]
    Empty { version: String },
}
