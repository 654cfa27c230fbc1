//! Chat-completion client for OpenAI-compatible endpoints.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use resumex_core::models::config::AiConfig;

use crate::error::{AiError, AiResult};

/// Explicitly constructed chat-completion client.
///
/// Built once from an [`AiConfig`] and passed into the extractor and
/// ranker; there is no ambient shared instance.
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    /// Create a new client from configuration.
    ///
    /// The API key comes from the config or, failing that, the
    /// `OPENAI_API_KEY` environment variable.
    pub fn new(config: &AiConfig) -> AiResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                AiError::Configuration(
                    "API key required: set ai.api_key or OPENAI_API_KEY".to_string(),
                )
            })?;

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model identifier this client sends requests with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a system + user message pair and return the assistant text.
    pub async fn complete(&self, system: &str, user: &str) -> AiResult<String> {
        debug!("chat completion request to {} ({})", self.base_url, self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user}
                ],
                "temperature": 0.0
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result: serde_json::Value = response.json().await?;
        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AiError::MalformedReply("missing message content".to_string()))?;

        Ok(content.to_string())
    }
}
