//! Unified application error type.
//! Store, storage, session and CLI code all funnel into AppError so that
//! `main` has a single place to report failures.

use crate::core::store::{NotFoundError, UpdateError};
use crate::core::validation::ValidationErrors;
use crate::storage::StorageUnavailable;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Storage(#[from] StorageUnavailable),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Store operations
    // ---------------------------
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    // ---------------------------
    // Image
    // ---------------------------
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Not logged in. Run `empmanager login` first")]
    NotLoggedIn,

    #[error("Invalid username or password")]
    InvalidCredentials,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl From<ValidationErrors> for AppError {
    fn from(errs: ValidationErrors) -> Self {
        AppError::Validation(errs)
    }
}

impl From<UpdateError> for AppError {
    fn from(err: UpdateError) -> Self {
        match err {
            UpdateError::Validation(errs) => AppError::Validation(errs),
            UpdateError::NotFound(e) => AppError::NotFound(e),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
