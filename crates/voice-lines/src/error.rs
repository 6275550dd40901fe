//! Errors for corpus loading and line lookup.

use thiserror::Error;

/// Failure while loading the static corpus. Fatal at startup.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Failure while answering a lookup. Callers treat it as "no results".
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup failed: {0}")]
    Internal(String),
}
