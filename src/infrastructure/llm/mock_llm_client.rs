use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{AnalysisField, CompletionRequest, NOT_MENTIONED};

/// Offline stand-in used in scaffold mode: answers every request with the
/// "not mentioned" placeholder in all six fields.
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete_json(&self, _request: &CompletionRequest) -> Result<String, LlmClientError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let answer: serde_json::Map<String, serde_json::Value> = AnalysisField::ALL
            .iter()
            .map(|field| (field.key().to_string(), NOT_MENTIONED.into()))
            .collect();

        Ok(serde_json::Value::Object(answer).to_string())
    }
}
