//! Question/answer endpoints
//!
//! `POST /api/ask` is the only place a request leaves the machine. A blank
//! question is rejected here, before the advisor is ever invoked; a provider
//! failure comes back as a displayable message, never a crash.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};
use counsel_core::{Advisor, Persona};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Message shown when the question is blank
const EMPTY_QUESTION_WARNING: &str = "Please enter a question.";

/// Request body for `/api/ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Persona identifier; unknown values fall back to the generic assistant
    pub persona: String,
    /// The user's question, sent to the provider verbatim
    pub question: String,
}

/// Successful answer
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Error body for 4xx/5xx responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One selectable persona, as shown by the UI
#[derive(Debug, Serialize)]
pub struct PersonaInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// List the selectable personas
async fn personas() -> Json<Vec<PersonaInfo>> {
    Json(
        Persona::ALL
            .iter()
            .map(|p| PersonaInfo {
                id: p.id(),
                label: p.label(),
                description: p.description(),
            })
            .collect(),
    )
}

/// Generate an answer for one question
async fn ask(
    Extension(advisor): Extension<Arc<Advisor>>,
    Json(request): Json<AskRequest>,
) -> Response {
    if request.question.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: EMPTY_QUESTION_WARNING.to_string(),
            }),
        )
            .into_response();
    }

    match advisor.answer(&request.persona, &request.question).await {
        Ok(answer) => (StatusCode::OK, Json(AskResponse { answer })).into_response(),
        Err(e) => {
            warn!(persona = %request.persona, error = %e, "Answer generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: format!("Failed to generate an answer: {e}"),
                }),
            )
                .into_response()
        }
    }
}

/// Create ask routes
pub fn ask_routes() -> Router {
    Router::new()
        .route("/api/personas", get(personas))
        .route("/api/ask", post(ask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_llm::{CompletionRequest, CompletionResponse, Error as LlmError, LlmProvider};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider stub: counts calls, returns a canned result
    struct StubProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl StubProvider {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn available_models(&self) -> Vec<String> {
            vec!["gpt-4o-mini".to_string()]
        }

        fn default_model(&self) -> &str {
            "gpt-4o-mini"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> counsel_llm::Result<CompletionResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LlmError::Network("connection refused".to_string()));
            }
            Ok(CompletionResponse {
                content: "An answer.".to_string(),
                usage: None,
                finish_reason: Some("stop".to_string()),
                model: request.model,
            })
        }
    }

    fn advisor(provider: Arc<StubProvider>) -> Extension<Arc<Advisor>> {
        Extension(Arc::new(Advisor::new(provider)))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ask_returns_answer() {
        let provider = Arc::new(StubProvider::ok());
        let response = ask(
            advisor(provider.clone()),
            Json(AskRequest {
                persona: "financial-advisor".to_string(),
                question: "How should I start saving for retirement?".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["answer"], "An answer.");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_question_never_reaches_provider() {
        let provider = Arc::new(StubProvider::ok());
        let response = ask(
            advisor(provider.clone()),
            Json(AskRequest {
                persona: "financial-advisor".to_string(),
                question: "   \n ".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], EMPTY_QUESTION_WARNING);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_displayable_error() {
        let provider = Arc::new(StubProvider::failing());
        let response = ask(
            advisor(provider),
            Json(AskRequest {
                persona: "career-consultant".to_string(),
                question: "Should I switch jobs?".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("Failed to generate an answer"));
    }

    #[tokio::test]
    async fn test_personas_lists_all() {
        let Json(list) = personas().await;
        assert_eq!(list.len(), Persona::ALL.len());
        assert_eq!(list[0].id, "financial-advisor");
        assert_eq!(list[1].id, "career-consultant");
    }
}
