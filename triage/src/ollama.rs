//! Ollama `/api/chat` client
//!
//! Only the non-streaming chat call is used. One request per
//! classification; the client is not shared across invocations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TriageConfig;
use crate::error::{TriageError, TriageResult};

/// One chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Sampling options
#[derive(Debug, Clone, Serialize)]
pub struct ChatOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

/// Request for /api/chat
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Disable the model's thinking phase; the reply must be the JSON line.
    pub think: bool,
    pub stream: bool,
    pub options: ChatOptions,
}

/// Response from /api/chat (non-streaming)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Reply text, empty when the endpoint sent none.
    pub fn content(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| m.content.as_deref())
            .unwrap_or("")
    }
}

/// Thin client over the configured chat endpoint
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    config: TriageConfig,
}

impl OllamaClient {
    /// Build a client whose every request is bounded by `config.request_timeout`.
    pub fn new(config: TriageConfig) -> TriageResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Build the request body for `messages` with the configured sampling options.
    pub fn request_for(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages,
            think: false,
            stream: false,
            options: ChatOptions {
                temperature: self.config.temperature,
                num_predict: self.config.num_predict,
            },
        }
    }

    /// Send one chat request and return the reply text.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> TriageResult<String> {
        let request = self.request_for(messages);

        let response = self
            .http
            .post(&self.config.endpoint_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TriageError::Status { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response.content().to_string();
        debug!(model = %self.config.model, reply = %content, "Triage reply received");

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let client = OllamaClient::new(TriageConfig::default().with_model("qwen3:1.7b")).unwrap();
        let request = client.request_for(crate::prompts::triage_messages("hi"));
        // Round-trip through text so the f32 temperature reads back as 0.1.
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();

        assert_eq!(json["model"], "qwen3:1.7b");
        assert_eq!(json["think"], false);
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.1);
        assert_eq!(json["options"]["num_predict"], 150);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], crate::prompts::SYSTEM_PROMPT);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_response_content_defaults_to_empty() {
        let empty: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.content(), "");

        let no_content: ChatResponse = serde_json::from_str(r#"{"message": {}}"#).unwrap();
        assert_eq!(no_content.content(), "");

        let full: ChatResponse =
            serde_json::from_str(r#"{"message": {"role": "assistant", "content": "x"}}"#)
                .unwrap();
        assert_eq!(full.content(), "x");
    }
}
