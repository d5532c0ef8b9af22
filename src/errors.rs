//! Unified application error type.
//! All modules (store, core, ui, window) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Persisted record
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed settings record: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Daily goal is 0 minutes: cannot compute progress")]
    ZeroDailyGoal,

    #[error("Invalid timer duration: {0} min")]
    InvalidDuration(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Terminal / desktop
    // ---------------------------
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Window focus failed: {0}")]
    Focus(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
