//! Crate error types and logging helpers
//!
//! Persistence failures are never surfaced to the UI layer; the store
//! recovers with an empty collection (reads) or keeps the in-memory state
//! (writes). The `StorageError` type makes that fallback path an explicit,
//! testable branch instead of an incidental catch-all.

use thiserror::Error;
use tracing::warn;

/// Failures of the key-value storage collaborator.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend could not produce the payload stored under `key`.
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend could not persist the payload under `key`.
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload stored under `key` is not valid JSON for the expected shape.
    #[error("malformed payload under key '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Extension trait for swallow-and-log error handling.
///
/// Used on the persistence path, where a failure must not roll back the
/// in-memory mutation that triggered it.
pub trait ResultExt<T> {
    /// Log the error as a warning with caller location and return `None`.
    fn log_warn(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    #[track_caller]
    fn log_warn(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %error,
                    file = caller.file(),
                    line = caller.line(),
                    "operation failed, continuing"
                );
                None
            }
        }
    }
}
