//! Error types for the autoscout client

/// Message shown when a failure carries no description of its own
pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to create monitor";

/// Errors that can occur in the autoscout client
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoutError {
    /// The text shown to the user when a submission ends in this error.
    ///
    /// Transport failures surface their own description verbatim; an empty
    /// description falls back to [`FALLBACK_FAILURE_MESSAGE`].
    pub fn failure_message(&self) -> String {
        let message = match self {
            ScoutError::Transport(description) => description.clone(),
            ScoutError::Json(e) => e.to_string(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for autoscout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
