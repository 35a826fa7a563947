/// Error types for the SMHI client
use thiserror::Error;

/// Message shown when a chart payload cannot be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load temperature data. Please try again later.";

/// Message shown when a city search cannot be completed.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search for cities. Please try again later.";

/// Main error type for client operations.
///
/// `Display` yields the user-facing message. Diagnostic detail (status code,
/// response body, transport error) is logged where the error is produced and
/// never carried here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Input rejected locally; no request was made
    #[error("{0}")]
    Validation(String),

    /// Backend reported no data for the requested city or period
    #[error("{0}")]
    NotFound(String),

    /// Transport failure, timeout, non-2xx status or unusable body
    #[error("{message}")]
    Fetch {
        message: &'static str,
        status: Option<u16>,
    },

    /// Client could not be configured
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The message to put in front of the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ClientError::validation("Please enter at least 2 characters").user_message(),
            "Please enter at least 2 characters"
        );
        assert_eq!(
            ClientError::not_found("No station data for X").user_message(),
            "No station data for X"
        );
        let err = ClientError::Fetch {
            message: FETCH_FAILED_MESSAGE,
            status: Some(500),
        };
        assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        assert!(!err.user_message().contains("500"));
    }
}
