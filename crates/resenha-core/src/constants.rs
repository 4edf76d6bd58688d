/// Resenha engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for the per-document topic-weight simplex check.
pub const TOPIC_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Polarity is always clamped into this closed interval.
pub const POLARITY_MIN: f64 = -1.0;
pub const POLARITY_MAX: f64 = 1.0;

/// Delimiter used when rendering aggregate tables to text.
pub const TABLE_DELIMITER: char = ';';
