//! Error types for dog_viewer

use std::path::PathBuf;

use thiserror::Error;

/// Why a single HTTP attempt failed
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// Server answered with a non-success status code
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    /// Request could not be completed (connection refused, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors surfaced by the Dog API client
#[derive(Debug, Error)]
pub enum DogApiError {
    /// Every attempt failed; carries the failure of the last one
    #[error("Request failed after {attempts} attempt(s): {failure}")]
    Transport {
        attempts: u32,
        #[source]
        failure: TransportFailure,
    },
    /// The API answered OK but the payload has the wrong shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
    /// A 2xx response whose body could not be read
    #[error("Failed to read response body: {0}")]
    ResponseBody(#[source] reqwest::Error),
    /// At least one image has to be requested
    #[error("Invalid image count: {0}")]
    InvalidCount(u32),
}

/// Persistence failures. The favorites store recovers from all of these.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read favorites from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write favorites to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for Dog API operations
pub type DogApiResult<T> = Result<T, DogApiError>;

/// Result alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
