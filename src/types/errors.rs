use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonetaryError {
    #[error("Monetary error: Value is an empty string")]
    Empty,
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: Overflow")]
    Overflow
}
