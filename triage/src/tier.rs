//! Complexity tiers and the downstream model table
//!
//! Every task is routed to exactly one of four tiers. Each tier maps to a
//! fixed downstream model identifier.
//!
//! ```text
//! Tier      | Downstream model
//! ----------|----------------------------------
//! simple    | ollama/dengcao/Qwen3-32B:Q5_K_M
//! moderate  | anthropic/claude-sonnet-4-5
//! coding    | openai-codex/gpt-5.2
//! complex   | anthropic/claude-opus-4-5
//! ```

use serde::{Deserialize, Serialize};

/// Complexity tier for routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Writing, fixing, debugging, or reviewing code and scripts
    Coding,
    /// Long-form content, system architecture, deep analysis
    Complex,
    /// Explanations, summaries, short writing
    Moderate,
    /// Greetings, quick facts, one-line answers
    Simple,
}

impl Tier {
    /// Substring scan order used when the model's answer is not a single tier.
    /// Specialized tiers win ties.
    pub const PRIORITY: [Tier; 4] = [Tier::Coding, Tier::Complex, Tier::Moderate, Tier::Simple];

    /// Fallback tier whenever classification is impossible.
    pub const DEFAULT: Tier = Tier::Moderate;

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Complex => "complex",
            Self::Moderate => "moderate",
            Self::Simple => "simple",
        }
    }

    /// Get the downstream model identifier
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Simple => "ollama/dengcao/Qwen3-32B:Q5_K_M",
            Self::Moderate => "anthropic/claude-sonnet-4-5",
            Self::Coding => "openai-codex/gpt-5.2",
            Self::Complex => "anthropic/claude-opus-4-5",
        }
    }

    /// Parse an exact tier name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(raw: &str) -> Option<Self> {
        let name = raw.trim().to_lowercase();
        Self::PRIORITY.into_iter().find(|t| t.as_str() == name)
    }

    /// Force a single valid tier out of whatever the model answered.
    ///
    /// Exact names win. Compound answers like `"coding|complex"` resolve to
    /// the first tier in [`Tier::PRIORITY`] found anywhere in the text.
    /// Anything else falls back to [`Tier::DEFAULT`].
    pub fn normalize(raw: &str) -> Self {
        if let Some(tier) = Self::from_name(raw) {
            return tier;
        }

        let lowered = raw.trim().to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|t| lowered.contains(t.as_str()))
            .unwrap_or(Self::DEFAULT)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names_normalize_to_themselves() {
        for tier in Tier::PRIORITY {
            assert_eq!(Tier::normalize(tier.as_str()), tier);
        }
        assert_eq!(Tier::normalize("  Coding "), Tier::Coding);
        assert_eq!(Tier::normalize("SIMPLE\n"), Tier::Simple);
    }

    #[test]
    fn test_compound_answer_uses_priority_order() {
        assert_eq!(Tier::normalize("coding|complex"), Tier::Coding);
        assert_eq!(Tier::normalize("complex|coding"), Tier::Coding);
        assert_eq!(Tier::normalize("simple or moderate"), Tier::Moderate);
        assert_eq!(Tier::normalize("simple, complex"), Tier::Complex);
        assert_eq!(Tier::normalize("tier: simple"), Tier::Simple);
    }

    #[test]
    fn test_unknown_answer_defaults_to_moderate() {
        assert_eq!(Tier::normalize(""), Tier::Moderate);
        assert_eq!(Tier::normalize("hard"), Tier::Moderate);
        assert_eq!(Tier::normalize("42"), Tier::Moderate);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["coding|complex", "Simple", "nonsense", " COMPLEX task "] {
            let once = Tier::normalize(raw);
            assert_eq!(Tier::normalize(once.as_str()), once);
        }
    }

    #[test]
    fn test_every_tier_has_a_model() {
        for tier in Tier::PRIORITY {
            assert!(!tier.model_id().is_empty(), "{tier} has no model");
        }
        assert_eq!(Tier::Coding.model_id(), "openai-codex/gpt-5.2");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Tier::Complex).unwrap();
        assert_eq!(json, "\"complex\"");
        let back: Tier = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(back, Tier::Simple);
    }
}
