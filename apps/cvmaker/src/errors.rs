#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
/// `user_message()` maps each variant to the string shown to the user;
/// internal detail stays in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Photo too large: {size} bytes")]
    PhotoTooLarge { size: usize },

    #[error("An export is already in progress")]
    ExportInProgress,

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The alert text shown to the user. Recoverable inputs get a specific
    /// message; everything else collapses to a generic one after logging.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidImport(_) => "Invalid JSON file.".to_string(),
            AppError::PhotoTooLarge { .. } => {
                "Photo too large. Please use a photo under 2.5MB.".to_string()
            }
            AppError::ExportInProgress => {
                "An export is already running. Please wait for it to finish.".to_string()
            }
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                "Export failed. Please try again.".to_string()
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                "Could not access saved data. Your CV was not changed.".to_string()
            }
            AppError::Json(e) => {
                tracing::error!("Serialization error: {e}");
                "Could not read saved data. Your CV was not changed.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Something went wrong. Your CV was not changed.".to_string()
            }
        }
    }
}
