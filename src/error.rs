use std::collections::TryReserveError;
use std::str::Utf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Unable to allocate a sorted copy of the sample. Reason: `{0}`.")]
    Allocation(#[from] TryReserveError),
    #[error("Input line is not valid UTF-8. Reason: `{0}`.")]
    InvalidEncoding(#[from] Utf8Error),
    #[error("`{0}` is not a whole number.")]
    InvalidToken(String),
    #[error("`{0}` is negative. Only non-negative whole numbers are accepted.")]
    NegativeValue(String),
    #[error("`{0}` is too large to fit in a 64-bit integer.")]
    ValueOutOfRange(String),
    #[error("Unable to take the sample out of Calculator while other clones still hold it.")]
    SharedSample,
    #[error("Unable to read input or write output. Reason: `{0}`.")]
    Io(#[from] std::io::Error),
    #[error("Unable to serialize summary. Reason: `{0}`.")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
