use std::io;

use thiserror::Error;

use crate::models::RecordError;

/// Reasons a ledger file could not be loaded. Any of these leaves the caller with no transactions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to open ledger file '{path}': {source}")]
    Open {
        path: String,
        source: io::Error
    },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row at line {line} is invalid ({source}): {raw}")]
    Row {
        line: u64,
        raw: String,
        source: RecordError
    },
    #[error("Ledger loader task failed: {0}")]
    Worker(#[from] tokio::task::JoinError)
}

impl LoadError {
    pub fn open(path: &std::path::Path, source: io::Error) -> Self {
        Self::Open { path: path.display().to_string(), source }
    }

    pub fn row(line: u64, record: &csv::StringRecord, source: RecordError) -> Self {
        Self::Row {
            line,
            raw: record.iter().collect::<Vec<_>>().join(","),
            source
        }
    }
}
