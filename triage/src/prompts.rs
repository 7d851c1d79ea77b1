//! Triage prompt
//!
//! The system prompt asks the triage model for a single-line JSON object
//! naming exactly one tier. Reply parsing lives in [`crate::extract`].

use crate::ollama::ChatMessage;

/// System instruction describing the four tiers.
pub const SYSTEM_PROMPT: &str = r#"Pick exactly ONE category for this task. You must pick only one.

1. coding - writing, fixing, debugging, or reviewing code and scripts
2. complex - content over 500 words, system architecture, deep analysis
3. moderate - explanations, summaries, short writing, product descriptions
4. simple - greetings, quick facts, one-line answers

Reply with ONLY one JSON object. The tier MUST be one single word from: coding, complex, moderate, simple

Example replies:
{"tier": "simple", "reason": "greeting"}
{"tier": "coding", "reason": "asks to write a script"}
{"tier": "moderate", "reason": "asks for an explanation"}
{"tier": "complex", "reason": "requires 2000 word essay"}"#;

/// Build the two-message conversation sent for one classification.
pub fn triage_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tier;

    #[test]
    fn test_system_prompt_names_every_tier() {
        for tier in Tier::PRIORITY {
            assert!(SYSTEM_PROMPT.contains(tier.as_str()));
        }
    }

    #[test]
    fn test_messages_are_system_then_user() {
        let messages = triage_messages("Hello!");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Hello!");
    }
}
