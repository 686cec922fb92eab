//! Provider trait the rest of the app programs against

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::Result;

/// A chat-completion provider.
///
/// One implementation exists in production (OpenAI); the trait keeps the
/// answer path testable without a network connection.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get available models
    fn available_models(&self) -> Vec<String>;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Complete a conversation
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
