//! Error definitions for a synchronization run.
//!
//! Every error here is terminal: there is no retry and no recovery, the
//! binary maps any `Err` to exit code 1.

use std::path::PathBuf;

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors that can occur while synchronizing a domain config resource.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Local configuration file could not be opened or read.
    #[error("cannot read config file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Local configuration file is not valid JSON.
    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CA bundle named by `OS_CACERT` is unreadable or holds no certificates.
    #[error("cannot load CA bundle {path}: {reason}")]
    CaBundle { path: PathBuf, reason: String },

    /// Authentication token cannot be carried as an HTTP header value.
    #[error("auth token is not a valid header value: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// HTTP client construction failed.
    #[error("cannot build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level failure on a request (DNS, TLS, timeout, refused connection).
    #[error("{method} {url} failed: {source}")]
    Http {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Write request completed but returned a status outside the 2xx range.
    #[error("{method} {url} returned unexpected status {status}")]
    UnexpectedStatus {
        method: Method,
        url: String,
        status: StatusCode,
    },
}

/// Result type for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;
