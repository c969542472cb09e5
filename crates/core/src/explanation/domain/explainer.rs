use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExplainError {
    #[error("Gemini API error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("request to Gemini failed: {0}")]
    Transport(String),
    #[error("unexpected Gemini response: {0}")]
    Malformed(String),
    #[error("no Gemini API key configured")]
    MissingApiKey,
}

impl ExplainError {
    /// Whether repeating the same request could plausibly succeed.
    ///
    /// Rate limiting, server-side failures and transport errors are
    /// retryable; client errors and malformed responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ExplainError::Status { status, .. } => *status == 429 || *status >= 500,
            ExplainError::Transport(_) => true,
            ExplainError::Malformed(_) | ExplainError::MissingApiKey => false,
        }
    }
}

/// Domain interface for turning an analysis prompt into explanatory text.
pub trait Explainer: Send {
    fn explain(&self, prompt: &str) -> Result<String, ExplainError>;
}
