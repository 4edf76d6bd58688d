//! # resenha-aggregate
//!
//! Frequency & cross-tabulation aggregation over already-computed
//! per-review results. Performs no new classification: a pure,
//! idempotent rollup that is safe to re-run without re-invoking the
//! classifier or the topic model.

pub mod aggregator;
pub mod tables;

pub use aggregator::{Aggregator, ReviewRecord};
pub use tables::{
    render_delimited, AggregateTables, AnnotatedReviewRow, ContingencyRow,
    SentimentDistributionRow, TableRow, ThemeDistributionRow, TopicKeywordsRow, WordFrequencyRow,
    UNCLASSIFIED_AXIS,
};
