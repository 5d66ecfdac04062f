use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::CompletionRequest;

const COMPLETIONS_PATH: &str = "/chat/completions";

/// Client for OpenAI-compatible chat completion endpoints (DeepSeek, OpenAI,
/// LM Studio, ...).
pub struct OpenAiClient {
    client: Client,
    completions_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmClientError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            completions_url: format!("{}{COMPLETIONS_PATH}", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn completions_url(&self) -> &str {
        &self.completions_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, request), fields(model = %self.model))]
    async fn complete_json(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_message,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let text = response.text().await.unwrap_or_default();
                return Err(LlmClientError::Unauthorized(format!("HTTP {status}: {text}")));
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(LlmClientError::RateLimited),
            s if !s.is_success() => {
                let text = response.text().await.unwrap_or_default();
                return Err(LlmClientError::ApiRequestFailed(format!(
                    "HTTP {status}: {text}"
                )));
            }
            _ => {}
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let completion: ChatCompletion = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse completion envelope"
            );
            LlmClientError::InvalidResponse(e.to_string())
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                LlmClientError::InvalidResponse("completion has no message content".to_string())
            })?;

        tracing::debug!(content_chars = content.chars().count(), "Completion received");
        Ok(content)
    }
}
