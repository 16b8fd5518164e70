//! Errors raised by settings, request validation and PNG output.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for moodlift operations
#[derive(Error, Diagnostic, Debug)]
pub enum MoodError {
    #[error("IO error: {0}")]
    #[diagnostic(code(moodlift::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(moodlift::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(moodlift::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(moodlift::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(moodlift::encode))]
    Encode {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MoodError>;
