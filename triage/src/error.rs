//! Triage error types
//!
//! None of these reach the command surface: the classifier absorbs them and
//! falls back to the default tier. They exist so the fallback reason can say
//! what went wrong.

use thiserror::Error;

/// Result type alias for triage operations
pub type TriageResult<T> = Result<T, TriageError>;

/// Errors raised while talking to the triage endpoint or reading its reply
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid JSON reply: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reply is JSON but not an object")]
    NotAnObject,
}

impl TriageError {
    /// Whether the endpoint itself could not be used (as opposed to a bad reply).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}
