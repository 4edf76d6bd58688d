/// Configuration defects. All of these are fatal at engine construction:
/// they invalidate every subsequent result.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("taxonomy has no axes")]
    EmptyTaxonomy,

    #[error("axis '{axis_id}' has an empty keyword set")]
    EmptyKeywordSet { axis_id: String },

    #[error("duplicate axis id '{axis_id}' in taxonomy")]
    DuplicateAxis { axis_id: String },

    #[error("topic count must be at least 1, got {requested}")]
    InvalidTopicCount { requested: usize },

    #[error("{threshold} sentiment threshold must be positive, got {value}")]
    InvalidThreshold { threshold: &'static str, value: f64 },

    #[error("maximum document-frequency ratio must be in (0, 1], got {value}")]
    InvalidDocRatio { value: f64 },

    #[error("word-frequency top-N must be at least 1")]
    ZeroTopWords,

    #[error("failed to parse configuration: {reason}")]
    Malformed { reason: String },
}
