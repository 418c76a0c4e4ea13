//! Ingestion failure taxonomy.

use thiserror::Error;

/// Errors produced while loading a course dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read dataset")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("missing required columns: {missing:?} (available: {available:?})")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("record {record}: group `{value}` is not an integer")]
    InvalidGroup { record: usize, value: String },

    #[error("record {record}: enrollment `{value}` is not in current/total form")]
    InvalidEnrollment { record: usize, value: String },

    #[error("record {record}: required field `{field}` is empty")]
    EmptyField { record: usize, field: &'static str },

    #[error("dataset contains no sections")]
    Empty,
}
