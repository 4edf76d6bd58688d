//! Default configuration values, matching the original study parameters.

/// Tokens shorter than this are discarded.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Polarity above +threshold is positive, below -threshold negative.
pub const DEFAULT_SENTIMENT_THRESHOLD: f64 = 0.1;

/// Minimum keyword hits for an axis to count as matched.
pub const DEFAULT_MIN_AXIS_MATCHES: usize = 1;

/// Number of latent topics (K).
pub const DEFAULT_TOPIC_COUNT: usize = 5;

/// Ranked keywords reported per topic.
pub const DEFAULT_TOPIC_KEYWORDS: usize = 10;

/// Terms must appear in at least this many documents.
pub const DEFAULT_MIN_DOC_FREQ: usize = 3;

/// Terms appearing in more than this ratio of documents are pruned.
pub const DEFAULT_MAX_DOC_RATIO: f64 = 0.9;

/// Vocabulary cap, by descending corpus frequency.
pub const DEFAULT_MAX_FEATURES: usize = 2000;

/// LDA iteration budget.
pub const DEFAULT_TOPIC_ITERATIONS: usize = 20;

/// LDA seed.
pub const DEFAULT_TOPIC_SEED: u64 = 42;

/// Bounded retries after a degenerate or failed topic fit.
pub const DEFAULT_TOPIC_RETRIES: usize = 2;

/// Word-frequency table size.
pub const DEFAULT_TOP_WORDS: usize = 30;
