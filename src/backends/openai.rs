//! OpenAI backend
//!
//! Speaks the chat-completions API over a shared reqwest client.

use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Upstream client configured once at startup: URL, key, model and
/// temperature are fixed for the process lifetime.
pub struct OpenAiBackend {
    client: Client,
    url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiBackend {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.chat_completions_url(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        tracing::debug!("Sending completion request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&req)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error ({}): {}", status, error_text);
            return Err(ApiError::Upstream(format!(
                "OpenAI API returned {}: {}",
                status, error_text
            )));
        }

        let chat_resp: ChatResponse = response.json().await?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ApiError::Upstream("No completion returned by model".into()))?;

        Ok(text)
    }
}
