//! Counsel LLM - completion provider abstraction
//!
//! This crate provides the LLM integration for Counsel:
//! - Provider: the `LlmProvider` trait the rest of the app talks to
//! - OpenAI: chat-completion provider built on async-openai
//! - Message/Completion: request and response types
//! - Redact: key masking and error scrubbing for safe display

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod message;
pub mod openai;
pub mod provider;
pub mod redact;

pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use error::{Error, Result};
pub use message::{Message, MessageRole};
pub use openai::{OpenAiConfig, OpenAiProvider, DEFAULT_MODEL, MODELS};
pub use provider::LlmProvider;
