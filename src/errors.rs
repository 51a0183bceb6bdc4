//! Unified application error type.
//! Every layer (db, core, cli, utils) returns AppError so the menu loop can
//! decide in one place what is recoverable and what is fatal.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached EOF while a prompt was waiting.
    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Entry #{0} does not exist")]
    NotFound(i64),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Invalid date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    #[error("Invalid duration '{0}', expected whole minutes (0 or more)")]
    InvalidDuration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,
}

pub type AppResult<T> = Result<T, AppError>;
