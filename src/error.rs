//! Error types for the feature extraction frontend

use std::fmt;

/// Errors that can occur during feature extraction
#[derive(Debug, Clone)]
pub enum FrontendError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Processing error during feature extraction
    ProcessingError(String),
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            FrontendError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for FrontendError {}
