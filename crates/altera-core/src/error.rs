//! Core error types for altera-core.
//!
//! Defines the error hierarchy used across the library, built on thiserror.
//! Note that the timer subsystem deliberately swallows most of these at its
//! boundary: persistence failures degrade to a fresh in-memory timer rather
//! than surfacing to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for altera-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Analytics API errors
    #[error("Analytics API error: {0}")]
    Api(#[from] ApiError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Session-store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open session store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read or write against the store failed
    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    /// The store is locked by another process
    #[error("Session store is locked")]
    Locked,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown or malformed configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Analytics client errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL is not a valid URL
    #[error("Invalid analytics base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Analytics service returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode analytics response from {path}: {message}")]
    Decode { path: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::OperationFailed(err.to_string())
                }
            }
            _ => StorageError::OperationFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
