//! API Errors
//!
//! Every backend failure collapses into one of three kinds. The `Display`
//! output is what the UI shows in place of content.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a readable response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("Failed to {action}")]
    Status { action: &'static str, status: u16 },

    /// A 2xx body that is not the expected JSON
    #[error("Failed to {action}: invalid response ({message})")]
    Decode { action: &'static str, message: String },
}

impl ApiError {
    /// HTTP status, when the backend got far enough to send one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
