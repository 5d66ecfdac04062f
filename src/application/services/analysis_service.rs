use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{AnalysisResult, CompletionRequest};

use super::prompt::{SYSTEM_PROMPT, build_user_message, truncate_chars};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub max_input_chars: usize,
    pub temperature: f32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

pub struct AnalysisService<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    options: AnalysisOptions,
}

impl<L> AnalysisService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, options: AnalysisOptions) -> Self {
        Self {
            llm_client,
            options,
        }
    }

    pub fn build_request(&self, text: &str) -> CompletionRequest {
        let article = truncate_chars(text, self.options.max_input_chars);
        if article.len() < text.len() {
            tracing::debug!(
                max_input_chars = self.options.max_input_chars,
                dropped_bytes = text.len() - article.len(),
                "Article truncated before analysis"
            );
        }

        CompletionRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_message: build_user_message(article),
            temperature: self.options.temperature,
        }
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let request = self.build_request(text);

        let content = self
            .llm_client
            .complete_json(&request)
            .await
            .map_err(AnalysisError::Completion)?;

        let result = parse_analysis(&content)?;
        tracing::info!("Analysis parsed");
        Ok(result)
    }
}

/// Parses model output into an [`AnalysisResult`], separating "not JSON at
/// all" from "JSON of the wrong shape".
pub fn parse_analysis(content: &str) -> Result<AnalysisResult, AnalysisError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(AnalysisError::MalformedJson)?;

    if !value.is_object() {
        return Err(AnalysisError::NotAnObject);
    }

    serde_json::from_value(value).map_err(AnalysisError::Schema)
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("completion: {0}")]
    Completion(LlmClientError),
    #[error("model answer is not valid JSON: {0}")]
    MalformedJson(serde_json::Error),
    #[error("model answer is not a JSON object")]
    NotAnObject,
    #[error("model answer does not match the report schema: {0}")]
    Schema(serde_json::Error),
}
