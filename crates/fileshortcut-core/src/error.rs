//! Error types for the file shortcut core.
//!
//! Every variant is recoverable at the host boundary: the host shows the
//! message returned by [`ShortcutError::user_message`] instead of crashing.

use crate::content::UnsupportedReason;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the file shortcut core.
#[derive(Debug, Error)]
pub enum ShortcutError {
    // Resolution errors
    #[error("Unsupported content source: {reason}")]
    UnsupportedSource { reason: UnsupportedReason },

    #[error("No data found for {address}")]
    NoDataFound { address: String },

    #[error("Invalid content reference {reference}: {message}")]
    InvalidReference { reference: String, message: String },

    // Host capability errors
    #[error("Platform capability missing: {capability}")]
    PlatformCapabilityMissing { capability: String },

    // Content store errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Icon errors
    #[error("Image error: {message}")]
    Image {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for file shortcut operations.
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl From<std::io::Error> for ShortcutError {
    fn from(err: std::io::Error) -> Self {
        ShortcutError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<rusqlite::Error> for ShortcutError {
    fn from(err: rusqlite::Error) -> Self {
        ShortcutError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<image::ImageError> for ShortcutError {
    fn from(err: image::ImageError) -> Self {
        ShortcutError::Image {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ShortcutError {
    fn from(err: serde_json::Error) -> Self {
        ShortcutError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// User-facing message keys shown by the host (string resource names).
pub mod message {
    pub const NOT_SUPPORTED_ON_GOOGLE_DRIVE: &str = "msg_not_supported_on_google_drive";
    pub const NOT_SUPPORTED: &str = "msg_not_supported";
    pub const FILE_NOT_FOUND: &str = "msg_file_not_found";
    pub const PIN_NOT_SUPPORTED: &str = "msg_pin_shortcut_not_supported";
    pub const NOT_LAUNCHABLE: &str = "msg_not_launchable";
    pub const UNKNOWN_ERROR: &str = "msg_unknown_error";
}

impl ShortcutError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ShortcutError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Map to the message key the host shows to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ShortcutError::UnsupportedSource {
                reason: UnsupportedReason::CloudStorage,
            } => message::NOT_SUPPORTED_ON_GOOGLE_DRIVE,
            ShortcutError::UnsupportedSource { .. } | ShortcutError::InvalidReference { .. } => {
                message::NOT_SUPPORTED
            }
            ShortcutError::NoDataFound { .. } => message::FILE_NOT_FOUND,
            ShortcutError::PlatformCapabilityMissing { .. } => message::PIN_NOT_SUPPORTED,
            ShortcutError::Validation { field, .. } if field == "launch_target" => {
                message::NOT_LAUNCHABLE
            }
            _ => message::UNKNOWN_ERROR,
        }
    }
}
