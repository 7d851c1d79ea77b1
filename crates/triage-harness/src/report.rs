//! Console report formatting
//!
//! ```text
//! ======================================================================
//! Intelli-Router Classification Test (4-tier)
//! ======================================================================
//! ✅ [0.4s]   simple → ollama/dengcao/Qwen3-32B:Q5_K_M
//!            Hello!
//! ❌ [0.6s] moderate → anthropic/claude-sonnet-4-5
//!            Write a 2000-word blog post analyzing AI trends in print-on-demand
//!            Expected: complex, Got: moderate (blog post)
//! ======================================================================
//! Results: 11/12 correct
//! Some misclassifications. Review the triage system prompt.
//! ```

use crate::runner::{CaseOutcome, HarnessSummary};

pub const PASS_MARK: &str = "\u{2705}";
pub const FAIL_MARK: &str = "\u{274c}";
pub const TITLE: &str = "Intelli-Router Classification Test (4-tier)";

const RULE_WIDTH: usize = 70;
const PROMPT_WIDTH: usize = 65;
const ERROR_PROMPT_WIDTH: usize = 60;
const INDENT: &str = "           ";

/// First `max` characters of `text`.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Lines printed before the first case
pub fn header_lines() -> Vec<String> {
    vec![rule(), TITLE.to_string(), rule()]
}

/// Lines printed for one finished case
pub fn case_lines(outcome: &CaseOutcome) -> Vec<String> {
    let prompt = outcome.case.prompt;
    let output = match &outcome.result {
        Ok(output) => output,
        Err(e) => {
            return vec![format!(
                "{FAIL_MARK} ERROR: {e} | {}",
                truncate(prompt, ERROR_PROMPT_WIDTH)
            )]
        }
    };

    let mark = if outcome.passed() { PASS_MARK } else { FAIL_MARK };
    let mut lines = vec![
        format!(
            "{mark} [{:.1}s] {:>8} \u{2192} {}",
            outcome.elapsed.as_secs_f64(),
            output.tier,
            output.model
        ),
        format!("{INDENT}{}", truncate(prompt, PROMPT_WIDTH)),
    ];
    if !outcome.passed() {
        lines.push(format!(
            "{INDENT}Expected: {}, Got: {} ({})",
            outcome.case.expected,
            output.tier,
            output.reason_text()
        ));
    }
    lines
}

/// Lines printed after the last case
pub fn summary_lines(summary: &HarnessSummary) -> Vec<String> {
    let verdict = if summary.all_passed() {
        "All tests passed! Router is ready."
    } else {
        "Some misclassifications. Review the triage system prompt."
    };
    vec![
        rule(),
        format!("Results: {}/{} correct", summary.correct(), summary.total()),
        verdict.to_string(),
    ]
}
