use std::result;

use thiserror::Error;

/// Error types for searching, fetching and exporting papers
#[derive(Error, Debug)]
pub enum PapersError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Search limit exceeded
    #[error("Search limit exceeded: requested {requested}, maximum is {maximum}")]
    SearchLimitExceeded { requested: usize, maximum: usize },

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = result::Result<T, PapersError>;

/// A single article in an EFetch response that lacks the structure needed
/// to build a record. Reported and skipped; never fatal to a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed record {}: {reason}", pmid.as_deref().unwrap_or("<unknown>"))]
pub struct MalformedRecord {
    /// Whatever identifier could be recovered from the article
    pub pmid: Option<String>,
    pub reason: String,
}

impl MalformedRecord {
    pub fn new(pmid: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            pmid,
            reason: reason.into(),
        }
    }
}
