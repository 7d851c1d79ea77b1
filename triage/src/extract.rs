//! Reply extraction
//!
//! The triage model is asked for a bare JSON line but often wraps it in a
//! Markdown fence (```` ```json ... ``` ````). Fences are stripped before
//! parsing; anything that is still not a JSON object is rejected.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::error::{TriageError, TriageResult};

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```(?:json)?\s*").expect("fence-open pattern"));
static FENCE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)```\s*$").expect("fence-close pattern"));

/// Remove leading and trailing code-fence markers from every line.
pub fn strip_code_fences(text: &str) -> String {
    let text = text.trim();
    let text = FENCE_OPEN.replace_all(text, "");
    let text = FENCE_CLOSE.replace_all(&text, "");
    text.trim().to_string()
}

/// Strip fences and parse the reply as a JSON object.
pub fn extract_json(text: &str) -> TriageResult<Map<String, Value>> {
    let cleaned = strip_code_fences(text);
    match serde_json::from_str::<Value>(&cleaned)? {
        Value::Object(map) => Ok(map),
        _ => Err(TriageError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_is_untouched() {
        let text = r#"{"tier": "simple", "reason": "greeting"}"#;
        assert_eq!(strip_code_fences(text), text);
    }

    #[test]
    fn test_json_fence_is_stripped() {
        let text = "```json\n{\"tier\": \"coding\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"tier\": \"coding\"}");
    }

    #[test]
    fn test_bare_fence_and_trailing_whitespace() {
        let text = "  ```\n{\"tier\": \"complex\"}\n```   \n";
        assert_eq!(strip_code_fences(text), "{\"tier\": \"complex\"}");
    }

    #[test]
    fn test_single_line_fence() {
        let text = "```json {\"tier\": \"simple\"}```";
        assert_eq!(strip_code_fences(text), "{\"tier\": \"simple\"}");
    }

    #[test]
    fn test_extract_json_object() {
        let map = extract_json("```json\n{\"tier\": \"Coding \", \"reason\": \"script\"}\n```")
            .unwrap();
        assert_eq!(map["tier"], "Coding ");
        assert_eq!(map["reason"], "script");
    }

    #[test]
    fn test_extract_rejects_prose_and_non_objects() {
        assert!(matches!(
            extract_json("I think this is simple"),
            Err(TriageError::Parse(_))
        ));
        assert!(matches!(
            extract_json("[\"simple\"]"),
            Err(TriageError::NotAnObject)
        ));
        assert!(matches!(extract_json(""), Err(TriageError::Parse(_))));
    }
}
