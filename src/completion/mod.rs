//! Hosted chat-completion access.
//!
//! [`GroqClient`] speaks the OpenAI-compatible wire format. Callers go through
//! the [`CompletionBackend`] trait so the transport can be swapped in tests,
//! and through [`complete`] / [`enhance`] which fix the message layout and
//! sampling parameters.

mod client;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use client::GroqClient;
pub use types::*;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::config::GenerationConfig;
use crate::error::{CompletionError, CompletionResult};
use crate::prompts::{enhance_prompt, ENHANCE_SYSTEM_PROMPT, FALLBACK_REPLY};

/// Transport for a single non-streaming chat completion.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Submit the request and return the reply text.
    async fn chat(&self, request: &ChatRequest) -> CompletionResult<String>;
}

/// Outcome of [`complete`]: the text to show plus the failure, if any.
#[derive(Debug)]
pub struct Completion {
    /// Model reply, or [`FALLBACK_REPLY`] when the call failed.
    pub text: String,
    /// Set when `text` is the fallback.
    pub error: Option<CompletionError>,
}

impl Completion {
    /// Whether the call failed and `text` is the fallback apology.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Build the ordered message list: system prompt, history, then the new message.
pub fn build_messages(
    system_prompt: &str,
    history: &[ConversationTurn],
    user_message: &str,
) -> Vec<ConversationTurn> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ConversationTurn::system(system_prompt));
    messages.extend(history.iter().cloned());
    messages.push(ConversationTurn::user(user_message));
    messages
}

/// Send a conversational turn. Never fails: transport and API errors are
/// reported through [`Completion::error`] next to the fallback text.
pub async fn complete(
    backend: &dyn CompletionBackend,
    generation: &GenerationConfig,
    system_prompt: &str,
    history: &[ConversationTurn],
    user_message: &str,
) -> Completion {
    let request = ChatRequest::new(
        &generation.model,
        build_messages(system_prompt, history, user_message),
    )
    .with_temperature(generation.temperature)
    .with_max_tokens(generation.max_tokens)
    .with_top_p(generation.top_p);

    match backend.chat(&request).await {
        Ok(text) => Completion { text, error: None },
        Err(e) => {
            error!(
                error = %e,
                model = %generation.model,
                "Completion failed, using fallback reply"
            );
            Completion {
                text: FALLBACK_REPLY.to_string(),
                error: Some(e),
            }
        }
    }
}

/// Ask the model to rewrite one plan section. No conversation history is sent.
pub async fn enhance(
    backend: &dyn CompletionBackend,
    generation: &GenerationConfig,
    section_text: &str,
    section_title: &str,
) -> CompletionResult<String> {
    let request = ChatRequest::new(
        &generation.model,
        vec![
            ConversationTurn::system(ENHANCE_SYSTEM_PROMPT),
            ConversationTurn::user(enhance_prompt(section_text, section_title)),
        ],
    )
    .with_temperature(generation.temperature)
    .with_max_tokens(generation.enhance_max_tokens);

    backend.chat(&request).await.map_err(|e| {
        warn!(error = %e, section = section_title, "Section enhancement failed");
        e
    })
}
