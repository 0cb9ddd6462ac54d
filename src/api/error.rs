//! API Error Types
//!
//! Failures of a call to the reporting API, and how each one is shown to
//! the user.

use thiserror::Error;

/// Shown for transport and unexpected failures; the cause is logged instead
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// API call failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but could not be understood
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for display on screen
    ///
    /// Application-level errors are shown verbatim; everything else collapses
    /// to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status for rejected requests
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_shown_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            message: "duplicate report".to_string(),
        };
        assert_eq!(err.user_message(), "duplicate report");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_transport_cause_hidden() {
        let err = ApiError::Transport("connection refused (os error 111)".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection refused"));

        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
