//! Unified application error type.
//! All modules (db, roster, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Roster ingestion
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Roster data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Roster schema error: missing column '{0}'")]
    SchemaError(String),

    #[error("Industry classification unavailable: {0}")]
    ClassificationUnavailable(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Call note is empty")]
    EmptyNote,

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;
