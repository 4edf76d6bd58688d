//! # resenha-themes
//!
//! Multi-label thematic classification against the fixed axis taxonomy.
//! A review may match 0, 1, or many axes; zero matches is "unclassified",
//! retained and counted separately. No forced tie-break between axes.

pub mod classifier;

pub use classifier::{classify, ThemeClassifier};
