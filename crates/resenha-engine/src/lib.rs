//! # resenha-engine
//!
//! The top-level analysis engine: turns a review corpus into per-review
//! sentiment, thematic classification and topic weights, plus the
//! aggregate tables. One batch run per corpus; per-review work is
//! parallel, the topic fit is a single blocking call, and a topic
//! failure degrades to a recorded skip instead of failing the run.

pub mod engine;
pub mod report;

pub use engine::AnalysisEngine;
pub use report::AnalysisReport;
