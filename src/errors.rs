//! Unified application error type.
//! All modules (core, storage, db, cli) return AppError to keep the error
//! handling consistent. Business-rule violations and hard failures share the
//! enum but are told apart with `is_business_rule()`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Business rules (recoverable by the caller)
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    InvalidStateTransition(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage error on {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Activity log error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Storage {
            path: path.into(),
            source,
        }
    }

    /// True for errors produced by a rule check; false for I/O, database and
    /// configuration failures.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_)
                | AppError::NotFound(_)
                | AppError::PermissionDenied(_)
                | AppError::InvalidStateTransition(_)
                | AppError::AuthenticationFailed(_)
        )
    }

    /// A failed pin check sends the operator back to the login prompt.
    pub fn ends_session(&self) -> bool {
        matches!(self, AppError::AuthenticationFailed(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
