use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("LLM rate limit exceeded: {0}")]
    LlmThrottled(String),

    #[error("LLM authentication failed: {0}")]
    LlmUnauthorized(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
