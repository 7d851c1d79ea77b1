//! Prompt classifier
//!
//! Asks the local triage model for a tier and turns whatever it answers into
//! a routing decision. Fail-open: an unreachable endpoint or an unreadable
//! reply yields [`Tier::DEFAULT`] with a diagnostic reason, never an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::TriageConfig;
use crate::error::TriageResult;
use crate::extract::extract_json;
use crate::ollama::OllamaClient;
use crate::prompts::triage_messages;
use crate::tier::Tier;

/// Reason attached when the reply could not be parsed
pub const PARSE_FAILED_REASON: &str = "Parse failed, defaulting";

/// Parsed classifier reply
///
/// `tier` is `None` only when the model returned a JSON object without a
/// `tier` field. Any tier that is present has already been normalized.
/// `reason` is kept as whatever JSON value the model sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Value>,
}

impl Classification {
    /// Fallback result used for every absorbed failure
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            tier: Some(Tier::DEFAULT),
            reason: Some(Value::String(reason.into())),
        }
    }

    /// Build from a parsed reply object, normalizing the tier if present.
    pub fn from_reply(reply: &Map<String, Value>) -> Self {
        let tier = reply.get("tier").map(|raw| match raw {
            Value::String(s) => Tier::normalize(s),
            other => Tier::normalize(&other.to_string()),
        });
        Self {
            tier,
            reason: reply.get("reason").cloned(),
        }
    }

    pub fn tier_or_default(&self) -> Tier {
        self.tier.unwrap_or(Tier::DEFAULT)
    }
}

/// Final routing output of the `classify` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// Downstream model identifier for `tier`
    pub model: String,
    pub tier: Tier,
    /// Model's reason, passed through untouched; empty string when absent
    pub reason: Value,
}

impl From<Classification> for RouteDecision {
    fn from(classification: Classification) -> Self {
        let tier = classification.tier_or_default();
        Self {
            model: tier.model_id().to_string(),
            tier,
            reason: classification
                .reason
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }
}

/// Classifies task prompts through the triage endpoint
pub struct Classifier {
    client: OllamaClient,
}

impl Classifier {
    /// Create a classifier for `config`
    pub fn new(config: TriageConfig) -> TriageResult<Self> {
        Ok(Self {
            client: OllamaClient::new(config)?,
        })
    }

    /// Classify a prompt. Never fails.
    pub async fn classify(&self, prompt: &str) -> Classification {
        match self.try_classify(prompt).await {
            Ok(classification) => {
                info!(
                    tier = ?classification.tier,
                    reason = ?classification.reason,
                    "Prompt classified"
                );
                classification
            }
            Err(e) if e.is_unavailable() => {
                warn!(
                    endpoint = %self.client.config().endpoint_url,
                    error = %e,
                    "Triage endpoint unavailable, defaulting to {}",
                    Tier::DEFAULT
                );
                Classification::fallback(format!("Ollama unavailable ({e})"))
            }
            Err(e) => {
                warn!(error = %e, "Triage reply unreadable, defaulting to {}", Tier::DEFAULT);
                Classification::fallback(PARSE_FAILED_REASON)
            }
        }
    }

    /// Classify and map to the downstream model.
    pub async fn route(&self, prompt: &str) -> RouteDecision {
        self.classify(prompt).await.into()
    }

    async fn try_classify(&self, prompt: &str) -> TriageResult<Classification> {
        let reply = self.client.chat(triage_messages(prompt)).await?;
        let parsed = extract_json(&reply).inspect_err(|_| {
            debug!(reply = %reply, "Reply is not a JSON object");
        })?;
        Ok(Classification::from_reply(&parsed))
    }
}
