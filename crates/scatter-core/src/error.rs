// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for loading, validating and rendering the dataset.

use thiserror::Error;

/// The dataset could not be fetched or decoded.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON dataset")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV dataset")]
    Csv(#[from] csv::Error),
    #[error("unsupported data source '{0}' (expected an http(s) URL, .json or .csv file)")]
    Unsupported(String),
}

/// A record (or the dataset as a whole) violates the data contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("record {index}: missing field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index}: '{value}' is not a 4-digit year")]
    InvalidYear { index: usize, value: String },
    #[error("record {index}: '{value}' is not a minutes:seconds time")]
    InvalidTime { index: usize, value: String },
    #[error("record {index}: malformed ({reason})")]
    Malformed { index: usize, reason: String },
    #[error("years {first}..{last} cannot be padded by {padding}")]
    YearRange { first: i32, last: i32, padding: i32 },
}

impl ValidationError {
    /// Index of the offending record, if the error is about a single record.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ValidationError::EmptyDataset | ValidationError::YearRange { .. } => None,
            ValidationError::MissingField { index, .. }
            | ValidationError::InvalidYear { index, .. }
            | ValidationError::InvalidTime { index, .. }
            | ValidationError::Malformed { index, .. } => Some(*index),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
