use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{ChatRequest, ChatResponse, ModelList};
use super::CompletionBackend;
use crate::config::{GroqConfig, RequestConfig};
use crate::error::{CompletionError, CompletionResult};

/// Client for the Groq OpenAI-compatible API
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
    request_config: RequestConfig,
}

impl GroqClient {
    /// Create a new Groq client
    pub fn new(config: &GroqConfig, request_config: RequestConfig) -> CompletionResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = request_config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build().map_err(CompletionError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_config,
        })
    }

    /// Submit one chat completion request and return the parsed body
    pub async fn create_chat_completion(
        &self,
        request: &ChatRequest,
    ) -> CompletionResult<ChatResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Calling chat completion"
        );

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(
                model = %request.model,
                status = status.as_u16(),
                latency_ms = start.elapsed().as_millis(),
                "Chat completion rejected"
            );
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::InvalidResponse {
                    message: format!("Failed to parse response: {}", e),
                })?;

        info!(
            model = %request.model,
            latency_ms = start.elapsed().as_millis(),
            total_tokens = ?chat_response.usage.as_ref().and_then(|u| u.total_tokens),
            "Chat completion succeeded"
        );

        Ok(chat_response)
    }

    /// List the models the endpoint serves
    pub async fn list_models(&self) -> CompletionResult<ModelList> {
        let url = format!("{}/v1/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse {
                message: format!("Failed to parse model list: {}", e),
            })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> CompletionError {
        match self.request_config.timeout_ms {
            Some(timeout_ms) if e.is_timeout() => CompletionError::Timeout { timeout_ms },
            _ => CompletionError::Http(e),
        }
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn chat(&self, request: &ChatRequest) -> CompletionResult<String> {
        let response = self.create_chat_completion(request).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyCompletion)
    }
}
