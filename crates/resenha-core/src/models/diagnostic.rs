use serde::{Deserialize, Serialize};

/// Which stage of the run produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticStage {
    Tokenizer,
    Sentiment,
    Themes,
    Topics,
    Aggregate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// One entry in the run's diagnostic trail. Every skipped or degraded
/// path is recorded here with its cause and the affected reviews where
/// applicable; no error is silently dropped from the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: DiagnosticStage,
    pub severity: Severity,
    pub message: String,
    pub affected_review_ids: Vec<String>,
}

impl Diagnostic {
    pub fn warning(stage: DiagnosticStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            severity: Severity::Warning,
            message: message.into(),
            affected_review_ids: Vec::new(),
        }
    }

    pub fn error(stage: DiagnosticStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            severity: Severity::Error,
            message: message.into(),
            affected_review_ids: Vec::new(),
        }
    }

    pub fn with_reviews(mut self, ids: Vec<String>) -> Self {
        self.affected_review_ids = ids;
        self
    }
}
