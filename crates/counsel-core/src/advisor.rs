//! Answer generation
//!
//! One persona + one question in, one completion call out. Stateless; every
//! invocation builds its own request and the provider owns the wire format.

use crate::error::Result;
use crate::persona;
use counsel_llm::{CompletionRequest, LlmProvider, Message};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The model every answer is generated with. Not user-configurable.
pub const ANSWER_MODEL: &str = counsel_llm::DEFAULT_MODEL;

/// Generates expert answers through a completion provider
pub struct Advisor {
    provider: Arc<dyn LlmProvider>,
}

impl Advisor {
    /// Creates an advisor backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing provider
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate an answer to `question` in the voice of `persona_id`.
    ///
    /// The caller guarantees a non-blank question. Sends exactly two
    /// messages, the persona instruction followed by the question verbatim,
    /// and returns the provider's text unmodified.
    ///
    /// # Errors
    /// Returns the provider's error untouched; no failure escapes as a panic.
    #[instrument(skip(self, question), fields(persona = persona_id))]
    pub async fn answer(&self, persona_id: &str, question: &str) -> Result<String> {
        let instruction = persona::instruction_for(persona_id);

        let request = CompletionRequest::new(ANSWER_MODEL)
            .with_message(Message::system(instruction))
            .with_message(Message::user(question));

        let response = self.provider.complete(request).await?;

        debug!(
            chars = response.content.len(),
            model = %response.model,
            "Answer generated"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_llm::{CompletionResponse, Error as LlmError, MessageRole};
    use mockall::mock;

    mock! {
        Provider {}

        #[async_trait::async_trait]
        impl LlmProvider for Provider {
            fn name(&self) -> &str;
            fn available_models(&self) -> Vec<String>;
            fn default_model(&self) -> &str;
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> counsel_llm::Result<CompletionResponse>;
        }
    }

    fn response(content: &str) -> CompletionResponse {
        CompletionResponse {
            content: content.to_string(),
            usage: None,
            finish_reason: Some("stop".to_string()),
            model: ANSWER_MODEL.to_string(),
        }
    }

    #[tokio::test]
    async fn test_answer_sends_system_then_user() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .withf(|request| {
                request.model == ANSWER_MODEL
                    && request.messages.len() == 2
                    && request.messages[0].role == MessageRole::System
                    && request.messages[0].content
                        == crate::persona::Persona::FinancialAdvisor.instruction()
                    && request.messages[1].role == MessageRole::User
                    && request.messages[1].content == "How should I start saving for retirement?"
            })
            .returning(|_| Ok(response("Start with an emergency fund.")));

        let advisor = Advisor::new(Arc::new(provider));
        let answer = advisor
            .answer("financial-advisor", "How should I start saving for retirement?")
            .await
            .unwrap();

        assert_eq!(answer, "Start with an emergency fund.");
    }

    #[tokio::test]
    async fn test_answer_unknown_persona_uses_default_instruction() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .withf(|request| {
                request.messages[0].content == crate::persona::DEFAULT_INSTRUCTION
            })
            .returning(|_| Ok(response("Hello.")));

        let advisor = Advisor::new(Arc::new(provider));
        let answer = advisor.answer("astrologer", "What is my sign?").await.unwrap();

        assert_eq!(answer, "Hello.");
    }

    #[tokio::test]
    async fn test_answer_propagates_provider_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LlmError::Network("connection refused".to_string())));

        let advisor = Advisor::new(Arc::new(provider));
        let result = advisor.answer("career-consultant", "Should I switch jobs?").await;

        assert!(matches!(
            result,
            Err(crate::Error::Llm(LlmError::Network(_)))
        ));
    }

    #[tokio::test]
    async fn test_answer_returns_provider_text_unmodified() {
        let text = "Paragraph one.\nParagraph two.";
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(move |_| Ok(response(text)));

        let advisor = Advisor::new(Arc::new(provider));
        let answer = advisor.answer("financial-advisor", "Hi").await.unwrap();

        assert_eq!(answer, text);
    }
}
