//! Error type for reply generation.

use thiserror::Error;

/// The only message ever shown to the user for a failed generation.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to Generate Email Reply. Please Try Again";

/// Errors that can occur while generating a reply.
///
/// The variants keep the diagnostic detail for logging; the UI collapses
/// all of them to [`GENERATION_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("Service error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Request body could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Submission is disabled (empty content or a generation in flight).
    #[error("Nothing to submit or a generation is already in flight")]
    NotReady,
}

impl ComposeError {
    /// User-facing message for display.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }
}
