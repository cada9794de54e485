use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Stored data could not be decoded.
    InvalidData,
    /// Browser storage is missing or rejected a write.
    StorageUnavailable,
    /// `config.toml` could not be parsed.
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidData => write!(f, "InvalidData"),
            AppErrorKind::StorageUnavailable => write!(f, "StorageUnavailable"),
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured error shared by the state model and the app crate.
///
/// None of these reach the user. Callers log them and degrade to a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidData,
            message: message.into(),
        }
    }

    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::StorageUnavailable,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::invalid_data(e.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::config(e.to_string())
    }
}
