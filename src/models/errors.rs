use thiserror::Error;

/// Fatal problems with a single ledger row. Any of these aborts the load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("Row has {found} columns, expected {expected}")]
    ColumnCount {
        expected: usize,
        found: usize
    },
    #[error("Invalid timestamp '{raw}': {source}")]
    InvalidTimestamp {
        raw: String,
        source: chrono::ParseError
    }
}

impl RecordError {
    pub fn column_count(expected: usize, found: usize) -> Self {
        Self::ColumnCount { expected, found }
    }

    pub fn invalid_timestamp(raw: &str, source: chrono::ParseError) -> Self {
        Self::InvalidTimestamp { raw: raw.to_string(), source }
    }
}
