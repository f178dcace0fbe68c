use thiserror::Error;

use crate::validation::ValidationIssue;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Reading terms failed: {0}")]
    Source(#[from] crate::error::SourceError),

    #[error("Invalid run request: {0}")]
    InvalidRequest(String),

    #[error("URL checker could not be built: {0}")]
    UrlChecker(String),
}

#[derive(Debug, Clone)]
pub enum PipelineWarning {
    Validation {
        term: String,
        associative_term: Option<String>,
        issue: ValidationIssue,
    },
    DegradedEntry {
        term: String,
        associative_term: Option<String>,
    },
}
