use async_trait::async_trait;

use crate::domain::CompletionRequest;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Issues one completion constrained to a JSON object and returns the raw
    /// message content.
    async fn complete_json(&self, request: &CompletionRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("client configuration invalid: {0}")]
    Configuration(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("authentication rejected: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
