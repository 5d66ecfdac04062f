/// A single JSON-mode completion exchange: one system message followed by one
/// user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub temperature: f32,
}
