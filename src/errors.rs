use core::fmt;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Regex(regex::Error),
    LockPoisoned,
    MissingParameter(String),
    NotFound(String),
    Validation(String),
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_: PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

impl AppError {
    /// Short machine-readable code sent back alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Io(_)
            | AppError::Json(_)
            | AppError::Regex(_)
            | AppError::LockPoisoned
            | AppError::Internal(_) => "internal_error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed contact data: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::LockPoisoned => {
                write!(f, "Contact store is unavailable")
            }
            AppError::MissingParameter(name) => {
                write!(f, "Missing {} parameter", name)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
