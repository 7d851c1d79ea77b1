//! Case runner
//!
//! Each case spawns the `classify` binary as a separate process and compares
//! the tier it prints with the expected one. Cases run one at a time.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cases::TestCase;
use crate::error::HarnessError;
use crate::report;

/// Default per-case wall-clock limit. Slightly above the classifier's own
/// request timeout so a fallback answer still arrives in time.
pub const DEFAULT_CASE_TIMEOUT_SECS: u64 = 15;

/// Placeholder for fields the classifier output did not contain
pub const UNKNOWN_FIELD: &str = "???";

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Path to the `classify` executable
    pub classifier: PathBuf,
    /// Wall-clock limit per case
    pub case_timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            classifier: default_classifier_path(),
            case_timeout: Duration::from_secs(DEFAULT_CASE_TIMEOUT_SECS),
        }
    }
}

/// The `classify` executable installed next to the running binary.
pub fn default_classifier_path() -> PathBuf {
    let name = format!("classify{}", std::env::consts::EXE_SUFFIX);
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .unwrap_or_else(|| PathBuf::from(name))
}

fn unknown() -> String {
    UNKNOWN_FIELD.to_string()
}

fn empty_reason() -> Value {
    Value::String(String::new())
}

/// What the classifier printed for one case
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierOutput {
    #[serde(default = "unknown")]
    pub tier: String,
    #[serde(default = "unknown")]
    pub model: String,
    /// Any JSON value; the classifier passes the model's reason through as-is.
    #[serde(default = "empty_reason")]
    pub reason: Value,
}

impl ClassifierOutput {
    /// Parse the classifier's stdout.
    pub fn parse(stdout: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(stdout.trim())?)
    }

    /// Reason for display: strings bare, other values as JSON text.
    pub fn reason_text(&self) -> String {
        match &self.reason {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Result of running one case
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: TestCase,
    pub elapsed: Duration,
    pub result: Result<ClassifierOutput, HarnessError>,
}

impl CaseOutcome {
    /// A case passes iff the printed tier equals the expected tier.
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(output) if output.tier == self.case.expected.as_str())
    }
}

/// Aggregate over a full run
#[derive(Debug, Default)]
pub struct HarnessSummary {
    pub outcomes: Vec<CaseOutcome>,
}

impl HarnessSummary {
    pub fn correct(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.correct() == self.total()
    }
}

/// Run a single case against the classifier binary.
pub async fn run_case(config: &HarnessConfig, case: TestCase) -> CaseOutcome {
    let start = Instant::now();
    let result = invoke_classifier(config, case.prompt).await;
    let elapsed = start.elapsed();

    match &result {
        Ok(output) => debug!(
            prompt = case.prompt,
            tier = %output.tier,
            elapsed_ms = elapsed.as_millis() as u64,
            "Case classified"
        ),
        Err(e) => warn!(prompt = case.prompt, error = %e, "Case failed to classify"),
    }

    CaseOutcome {
        case,
        elapsed,
        result,
    }
}

/// Run every case in order, printing each report as it completes.
pub async fn run_all(config: &HarnessConfig, cases: &[TestCase]) -> HarnessSummary {
    let mut summary = HarnessSummary::default();
    for case in cases {
        let outcome = run_case(config, *case).await;
        for line in report::case_lines(&outcome) {
            println!("{line}");
        }
        summary.outcomes.push(outcome);
    }
    summary
}

async fn invoke_classifier(
    config: &HarnessConfig,
    prompt: &str,
) -> Result<ClassifierOutput, HarnessError> {
    let mut cmd = tokio::process::Command::new(&config.classifier);
    // `--` keeps prompts that look like flags out of clap's option parsing.
    cmd.arg("--")
        .arg(prompt)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(config.case_timeout, cmd.output()).await {
        Ok(output) => output?,
        Err(_) => return Err(HarnessError::Timeout(config.case_timeout)),
    };

    ClassifierOutput::parse(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage::Tier;

    fn outcome(result: Result<ClassifierOutput, HarnessError>) -> CaseOutcome {
        CaseOutcome {
            case: TestCase {
                prompt: "Hello!",
                expected: Tier::Simple,
            },
            elapsed: Duration::from_millis(420),
            result,
        }
    }

    #[test]
    fn test_parse_full_output() {
        let output = ClassifierOutput::parse(
            "{\"model\": \"ollama/dengcao/Qwen3-32B:Q5_K_M\", \"tier\": \"simple\", \"reason\": \"greeting\"}\n",
        )
        .unwrap();
        assert_eq!(output.tier, "simple");
        assert_eq!(output.reason, "greeting");
    }

    #[test]
    fn test_parse_error_object_has_unknown_tier() {
        let output = ClassifierOutput::parse(r#"{"error": "No input provided"}"#).unwrap();
        assert_eq!(output.tier, UNKNOWN_FIELD);
        assert_eq!(output.model, UNKNOWN_FIELD);
        assert_eq!(output.reason, "");
    }

    #[test]
    fn test_parse_keeps_structured_reason() {
        let output =
            ClassifierOutput::parse(r#"{"tier": "simple", "model": "m", "reason": {"a": 1}}"#)
                .unwrap();
        assert_eq!(output.reason, serde_json::json!({"a": 1}));
        assert_eq!(output.reason_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ClassifierOutput::parse("Traceback (most recent call last)"),
            Err(HarnessError::Output(_))
        ));
        assert!(ClassifierOutput::parse("").is_err());
    }

    #[test]
    fn test_pass_requires_matching_tier() {
        let ok = outcome(ClassifierOutput::parse(r#"{"tier": "simple", "model": "m"}"#));
        assert!(ok.passed());

        let wrong = outcome(ClassifierOutput::parse(r#"{"tier": "moderate", "model": "m"}"#));
        assert!(!wrong.passed());

        let failed = outcome(Err(HarnessError::Timeout(Duration::from_secs(15))));
        assert!(!failed.passed());
    }

    #[test]
    fn test_summary_counts() {
        let summary = HarnessSummary {
            outcomes: vec![
                outcome(ClassifierOutput::parse(r#"{"tier": "simple"}"#)),
                outcome(ClassifierOutput::parse(r#"{"tier": "coding"}"#)),
            ],
        };
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.total(), 2);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_default_classifier_sits_next_to_current_exe() {
        let path = default_classifier_path();
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("classify"));
    }
}
