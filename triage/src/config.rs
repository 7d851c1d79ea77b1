//! Triage endpoint configuration
//!
//! Defaults target a local Ollama instance. Each field can be overridden
//! through the environment or, from the `classify` binary, command-line flags.

use std::time::Duration;

/// Default Ollama chat endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/chat";

/// Small local model used only for classification (~1.4 GB VRAM)
pub const DEFAULT_TRIAGE_MODEL: &str = "qwen3:1.7b";

/// Whole-request timeout for one classification
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Low randomness so identical prompts land in the same tier.
pub const TRIAGE_TEMPERATURE: f32 = 0.1;

/// A one-line JSON reply never needs more than this.
pub const TRIAGE_NUM_PREDICT: u32 = 150;

/// Configuration for the triage endpoint
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Full URL of the `/api/chat` endpoint
    pub endpoint_url: String,
    /// Triage model name
    pub model: String,
    pub temperature: f32,
    pub num_predict: u32,
    pub request_timeout: Duration,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("TRIAGE_OLLAMA_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            model: std::env::var("TRIAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_TRIAGE_MODEL.to_string()),
            temperature: TRIAGE_TEMPERATURE,
            num_predict: TRIAGE_NUM_PREDICT,
            request_timeout: Duration::from_secs(
                std::env::var("TRIAGE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

impl TriageConfig {
    /// Override the endpoint URL
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = url.into();
        self
    }

    /// Override the triage model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
