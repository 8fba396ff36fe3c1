//! Errors raised while talking to the form relay

use thiserror::Error;

/// Shown when the relay rejects a submission without saying why
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when the relay could not be reached at all
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay rejected submission with status {status}")]
    Rejected {
        status: u16,
        /// `error` string from a JSON response body, when present
        message: Option<String>,
    },
    #[error("failed to reach relay: {0}")]
    Transport(String),
}

impl RelayError {
    /// Single message suitable for the form's error banner
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            RelayError::Rejected { message: None, .. } => GENERIC_FAILURE_MESSAGE.to_string(),
            RelayError::Transport(_) => NETWORK_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}
